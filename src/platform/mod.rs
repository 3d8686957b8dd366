//! Platform abstraction layer
//!
//! The simulation never reads window or input state directly. A [`Surface`]
//! is sampled once per frame for its size and pointer, and receives the
//! finished draw list.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::renderer::DrawList;

/// Window and input collaborator
pub trait Surface {
    /// Current drawable width/height; may change between frames
    fn size(&self) -> Vec2;
    /// Pointer position in window coordinates
    fn pointer(&self) -> Vec2;
    /// Close requested (window closed, frame budget spent, ...)
    fn should_close(&self) -> bool;
    /// Hand over a finished frame
    fn present(&mut self, frame: &DrawList);
}

/// Windowless surface with a scripted pointer
///
/// The pointer sweeps a Lissajous curve over the window so hover highlighting
/// is exercised without input devices.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: Vec2,
    frame_budget: Option<u64>,
    frames_presented: u64,
    vertices_presented: u64,
    bytes_presented: u64,
}

impl HeadlessSurface {
    /// `frame_budget` of `None` never requests close
    pub fn new(size: Vec2, frame_budget: Option<u64>) -> Self {
        Self {
            size,
            frame_budget,
            frames_presented: 0,
            vertices_presented: 0,
            bytes_presented: 0,
        }
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn vertices_presented(&self) -> u64 {
        self.vertices_presented
    }

    /// Vertex buffer bytes a GPU surface would have uploaded
    pub fn bytes_presented(&self) -> u64 {
        self.bytes_presented
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn pointer(&self) -> Vec2 {
        let t = self.frames_presented as f32 / 240.0;
        let half = self.size * 0.5;
        Vec2::new(
            half.x + half.x * 0.9 * (t * TAU).sin(),
            half.y + half.y * 0.9 * (t * TAU * 1.5).cos(),
        )
    }

    fn should_close(&self) -> bool {
        self.frame_budget
            .is_some_and(|budget| self.frames_presented >= budget)
    }

    fn present(&mut self, frame: &DrawList) {
        self.frames_presented += 1;
        let bytes = frame.vertex_bytes().len();
        self.vertices_presented += frame.vertices.len() as u64;
        self.bytes_presented += bytes as u64;
        log::trace!(
            "present frame {}: {} vertices ({} bytes), {} text items",
            self.frames_presented,
            frame.vertices.len(),
            bytes,
            frame.texts.len()
        );
    }
}
