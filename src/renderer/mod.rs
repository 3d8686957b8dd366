//! Draw list generation
//!
//! Turns the simulation into the primitives a surface draws: a clear colour,
//! filled-circle triangles and debug text lines. Nothing here touches a GPU.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use std::time::Duration;

use crate::sim::{Circle, Simulation};
use vertex::{Vertex, colors};

/// Text font size in pixels
pub const FONT_SIZE: f32 = 20.0;

/// A line (or lines) of debug text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything a surface needs to present one frame
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    /// Triangle list, back to front
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.into(),
            pos,
            size: FONT_SIZE,
            color,
        });
    }

    /// Vertex data as raw bytes for a buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Timing shown in the overlay
///
/// `update` is the current frame's step; `draw` is the previous frame's, since
/// drawing is still running when the overlay text is built.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimings {
    pub update: Duration,
    pub draw: Duration,
}

/// Inspection text for a hovered circle
pub fn circle_info(circle: &Circle) -> String {
    format!(
        "Radius: {:.2}\nPosition: <{:.2}, {:.2}>\nDirection: <{:.2}, {:.2}>",
        circle.radius, circle.pos.x, circle.pos.y, circle.dir.x, circle.dir.y
    )
}

/// Build the draw list for the current simulation state
///
/// Circles are drawn in spawn order, then hover text, then the pointer marker
/// and the timing overlay on top.
pub fn build_frame(
    sim: &Simulation,
    pointer: Vec2,
    bounds: Vec2,
    timings: &FrameTimings,
    show_debug_text: bool,
) -> DrawList {
    let mut list = DrawList::new();

    for circle in &sim.circles {
        let color = if circle.highlighted {
            colors::CIRCLE_HIGHLIGHT
        } else {
            colors::CIRCLE_IDLE
        };
        list.fill_circle(circle.pos, circle.radius, color);
    }

    if show_debug_text {
        for circle in sim.highlighted() {
            list.text(circle_info(circle), Vec2::new(5.0, 5.0), colors::TEXT);
        }
    }

    list.fill_circle(pointer, sim.config.mouse_radius, colors::POINTER);

    if show_debug_text {
        list.text(
            format!("Frame Update: {} micros", timings.update.as_micros()),
            Vec2::new(5.0, bounds.y - FONT_SIZE),
            colors::TEXT,
        );
        list.text(
            format!("Frame Draw: {} micros", timings.draw.as_micros()),
            Vec2::new(5.0, bounds.y - 2.0 * FONT_SIZE),
            colors::TEXT,
        );
    }

    list
}
