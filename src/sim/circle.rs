//! Circle entity

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::policy::{contain, is_highlighted, reflect_walls};
use super::state::{FrameInput, SimConfig};

/// A moving circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    /// Heading; unit length at spawn and after repulsion
    pub dir: Vec2,
    pub radius: f32,
    /// Distance moved along `dir` per frame
    pub speed: f32,
    /// Pointer proximity this frame (selects the render colour)
    pub highlighted: bool,
}

impl Circle {
    /// Create a circle at the origin with a random radius and heading
    ///
    /// Placement assigns the position.
    pub fn new<R: Rng>(rng: &mut R, config: &SimConfig) -> Self {
        let radius =
            config.radius_min + rng.random::<f32>() * (config.radius_max - config.radius_min);
        let angle = rng.random::<f32>() * TAU;
        Self::with_heading(Vec2::ZERO, radius, Vec2::new(angle.cos(), angle.sin()), config.speed)
    }

    pub fn with_heading(pos: Vec2, radius: f32, dir: Vec2, speed: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self {
            pos,
            dir,
            radius,
            speed,
            highlighted: false,
        }
    }

    /// Center distance <= sum of radii
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.pos.distance(other.pos) <= self.radius + other.radius
    }

    /// Advance one frame: highlight, wall reflection, then integration
    ///
    /// `dir` is not renormalized here. Reflection only flips signs, so a unit
    /// heading stays unit length.
    pub fn update(&mut self, input: &FrameInput, config: &SimConfig) {
        self.highlighted = is_highlighted(self.pos, self.radius, input.mouse, config.mouse_radius);

        let (pos, dir) = reflect_walls(self.pos, self.dir, self.radius, input.bounds);
        self.pos = pos;
        self.dir = dir;

        self.pos += self.dir * self.speed;
        self.pos += config.drift;

        // A heading set by a collision may point into a wall; the next frame
        // reflects it, this keeps the circle inside until then.
        self.pos = contain(self.pos, self.radius, input.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RngState;

    fn input(mouse: Vec2) -> FrameInput {
        FrameInput::new(mouse, Vec2::new(1024.0, 576.0))
    }

    #[test]
    fn test_new_radius_in_range_and_unit_heading() {
        let config = SimConfig::default();
        let mut rng = RngState::new(7).to_rng();
        for _ in 0..100 {
            let c = Circle::new(&mut rng, &config);
            assert!(c.radius >= config.radius_min && c.radius <= config.radius_max);
            assert!((c.dir.length() - 1.0).abs() < 1e-5);
            assert_eq!(c.speed, config.speed);
        }
    }

    #[test]
    fn test_overlaps_touching_counts() {
        let a = Circle::with_heading(Vec2::new(0.0, 0.0), 30.0, Vec2::X, 0.85);
        let b = Circle::with_heading(Vec2::new(70.0, 0.0), 40.0, Vec2::X, 0.85);
        assert!(a.overlaps(&b));
        let c = Circle::with_heading(Vec2::new(70.5, 0.0), 40.0, Vec2::X, 0.85);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_update_reflects_off_top() {
        let config = SimConfig::default();
        let mut c = Circle::with_heading(Vec2::new(300.0, 30.0), 30.0, Vec2::new(0.0, -1.0), 0.85);
        c.update(&FrameInput::default(), &config);
        assert_eq!(c.dir.y, 1.0);
        assert!(c.pos.y >= c.radius);
    }

    #[test]
    fn test_update_free_flight_moves_by_speed() {
        let config = SimConfig::default();
        let dir = Vec2::new(0.6, 0.8);
        let start = Vec2::new(500.0, 300.0);
        let mut c = Circle::with_heading(start, 40.0, dir, config.speed);
        c.update(&FrameInput::default(), &config);
        assert_eq!(c.dir, dir);
        assert_eq!(c.pos, start + dir * config.speed);
        assert!(!c.highlighted);
    }

    #[test]
    fn test_update_applies_drift() {
        let config = SimConfig {
            drift: Vec2::new(0.5, -0.25),
            ..SimConfig::default()
        };
        let start = Vec2::new(500.0, 300.0);
        let mut c = Circle::with_heading(start, 40.0, Vec2::X, config.speed);
        c.update(&FrameInput::default(), &config);
        assert_eq!(c.pos, start + Vec2::X * config.speed + config.drift);
    }

    #[test]
    fn test_highlight_toggles_with_pointer() {
        let config = SimConfig::default();
        let mut c = Circle::with_heading(Vec2::new(500.0, 300.0), 40.0, Vec2::ZERO, config.speed);

        c.update(&input(Vec2::new(545.0, 300.0)), &config);
        assert!(c.highlighted);

        c.update(&input(Vec2::new(547.0, 300.0)), &config);
        assert!(!c.highlighted);

        c.update(&input(Vec2::new(545.0, 300.0)), &config);
        assert!(c.highlighted);
    }

    #[test]
    fn test_update_stays_inside_when_heading_into_wall() {
        let config = SimConfig::default();
        // Edge 0.5 units from the bottom wall, heading straight down
        let mut c = Circle::with_heading(Vec2::new(300.0, 545.5), 30.0, Vec2::Y, config.speed);
        c.update(&FrameInput::default(), &config);
        assert!(c.pos.y <= 576.0 - c.radius);

        // Touching now, so the next frame reflects
        c.update(&FrameInput::default(), &config);
        assert_eq!(c.dir, -Vec2::Y);
    }
}
