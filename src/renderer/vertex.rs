//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.961, 0.961, 0.961, 1.0]; // Ray white
    pub const CIRCLE_IDLE: [f32; 4] = [0.0, 0.894, 0.188, 1.0]; // Green
    pub const CIRCLE_HIGHLIGHT: [f32; 4] = [0.0, 0.475, 0.945, 1.0]; // Blue
    pub const POINTER: [f32; 4] = [1.0, 0.631, 0.0, 1.0]; // Orange
    pub const TEXT: [f32; 4] = [0.902, 0.161, 0.216, 1.0]; // Red
}
