//! Per-frame simulation step
//!
//! Order is fixed: every circle updates on its own (highlight, walls, move),
//! then the all-pairs scan redirects overlapping circles.

use super::collision::resolve_collisions;
use super::state::{FrameInput, Simulation};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Overlapping pairs found by the collision scan
    pub collisions: usize,
    /// Circles under the pointer
    pub highlighted: usize,
}

/// Advance the simulation by one frame
pub fn step(sim: &mut Simulation, input: &FrameInput) -> StepStats {
    for circle in &mut sim.circles {
        circle.update(input, &sim.config);
    }

    let collisions = resolve_collisions(&mut sim.circles);
    sim.frame += 1;

    StepStats {
        collisions,
        highlighted: sim.highlighted().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::circle::Circle;
    use crate::sim::state::{RngState, SimConfig};
    use glam::Vec2;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    fn assert_contained(sim: &Simulation, bounds: Vec2) {
        for c in &sim.circles {
            assert!(c.pos.x >= c.radius && c.pos.x <= bounds.x - c.radius, "{:?}", c);
            assert!(c.pos.y >= c.radius && c.pos.y <= bounds.y - c.radius, "{:?}", c);
        }
    }

    #[test]
    fn test_step_counts_frames() {
        let (mut sim, _) = Simulation::spawn(RngState::new(1), 5, BOUNDS, SimConfig::default());
        let input = FrameInput::default();
        for _ in 0..10 {
            step(&mut sim, &input);
        }
        assert_eq!(sim.frame, 10);
    }

    #[test]
    fn test_step_updates_before_collisions() {
        // Gap of 0.5 closes during the update, so the scan sees the overlap
        let config = SimConfig::default();
        let circles = vec![
            Circle::with_heading(Vec2::new(400.0, 300.0), 30.0, Vec2::X, config.speed),
            Circle::with_heading(Vec2::new(460.5, 300.0), 30.0, -Vec2::X, config.speed),
        ];
        let mut sim = Simulation::from_circles(circles, config);

        let stats = step(&mut sim, &FrameInput::default());
        assert_eq!(stats.collisions, 1);
        assert!(sim.circles[0].dir.abs_diff_eq(-Vec2::X, 1e-6));
        assert!(sim.circles[1].dir.abs_diff_eq(Vec2::X, 1e-6));
    }

    #[test]
    fn test_step_no_op_for_isolated_circle() {
        let config = SimConfig::default();
        let dir = Vec2::new(0.8, -0.6);
        let start = Vec2::new(512.0, 288.0);
        let mut sim = Simulation::from_circles(
            vec![Circle::with_heading(start, 50.0, dir, config.speed)],
            config,
        );

        let stats = step(&mut sim, &FrameInput::default());
        assert_eq!(stats, StepStats::default());
        assert_eq!(sim.circles[0].dir, dir);
        assert_eq!(sim.circles[0].pos, start + dir * CIRCLE_SPEED);
    }

    #[test]
    fn test_step_reports_highlight() {
        let config = SimConfig::default();
        let mut sim = Simulation::from_circles(
            vec![
                Circle::with_heading(Vec2::new(200.0, 200.0), 40.0, Vec2::X, config.speed),
                Circle::with_heading(Vec2::new(600.0, 200.0), 40.0, Vec2::X, config.speed),
            ],
            config,
        );
        let input = FrameInput::new(Vec2::new(210.0, 200.0), BOUNDS);
        let stats = step(&mut sim, &input);
        assert_eq!(stats.highlighted, 1);
        assert!(sim.circles[0].highlighted);
        assert!(!sim.circles[1].highlighted);
    }

    #[test]
    fn test_repelled_heading_stays_unit_through_walls() {
        // Corner-bound pair: repulsion then wall flips must keep |dir| == 1
        let config = SimConfig::default();
        let circles = vec![
            Circle::with_heading(Vec2::new(35.0, 35.0), 30.0, Vec2::ZERO, config.speed),
            Circle::with_heading(Vec2::new(80.0, 60.0), 30.0, Vec2::ZERO, config.speed),
        ];
        let mut sim = Simulation::from_circles(circles, config);
        for _ in 0..200 {
            step(&mut sim, &FrameInput::default());
            for c in &sim.circles {
                assert!((c.dir.length() - 1.0).abs() < 1e-5, "{:?}", c);
            }
        }
    }

    #[test]
    fn test_window_shrink_rehomes_circles() {
        let (mut sim, _) = Simulation::spawn(RngState::new(77), 10, BOUNDS, SimConfig::default());
        let small = Vec2::new(400.0, 300.0);
        step(&mut sim, &FrameInput::new(Vec2::ZERO, small));
        assert_contained(&sim, small);
    }

    proptest! {
        #[test]
        fn prop_spawned_circles_never_overlap(seed in any::<u64>(), count in 0usize..30) {
            let config = SimConfig::default();
            let (sim, error) = Simulation::spawn(RngState::new(seed), count, BOUNDS, config);
            if error.is_none() {
                prop_assert_eq!(sim.circles.len(), count);
            }
            for (i, a) in sim.circles.iter().enumerate() {
                for b in &sim.circles[i + 1..] {
                    prop_assert!(a.pos.distance(b.pos) > a.radius + b.radius);
                }
            }
        }

        #[test]
        fn prop_circles_stay_inside_window(
            seed in any::<u64>(),
            mouse_x in 0.0f32..SCREEN_WIDTH,
            mouse_y in 0.0f32..SCREEN_HEIGHT,
            frames in 1usize..400,
        ) {
            let config = SimConfig { speed: 6.0, ..SimConfig::default() };
            let (mut sim, _) = Simulation::spawn(RngState::new(seed), 15, BOUNDS, config);
            let input = FrameInput::new(Vec2::new(mouse_x, mouse_y), BOUNDS);
            for _ in 0..frames {
                step(&mut sim, &input);
            }
            for c in &sim.circles {
                prop_assert!(c.pos.x >= c.radius && c.pos.x <= BOUNDS.x - c.radius);
                prop_assert!(c.pos.y >= c.radius && c.pos.y <= BOUNDS.y - c.radius);
            }
        }
    }
}
