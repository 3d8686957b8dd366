//! Non-overlapping circle placement
//!
//! Rejection sampling: each new circle draws candidate positions inside the
//! spawn margin until one clears every circle placed so far. A circle that
//! cannot be placed within the attempt cap ends spawning; the circles already
//! placed are kept.

use glam::Vec2;
use rand::Rng;
use std::fmt;

use super::circle::Circle;
use super::state::SimConfig;

/// Placement stopped before reaching the requested count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// No free spot found within the attempt cap
    CapacityExhausted { requested: usize, spawned: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::CapacityExhausted { spawned, .. } => write!(
                f,
                "CIRCLES: Unable to load circles. No space left on the screen. {} Circles spawned.",
                spawned
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Outcome of a placement run
#[derive(Debug, Clone)]
pub struct SpawnReport {
    /// Accepted circles in spawn order
    pub circles: Vec<Circle>,
    /// Set when spawning stopped early
    pub error: Option<SpawnError>,
}

impl SpawnReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Place up to `count` circles inside `bounds` without overlap
pub fn spawn_circles<R: Rng>(
    rng: &mut R,
    count: usize,
    bounds: Vec2,
    config: &SimConfig,
) -> SpawnReport {
    // `count` comes from the command line; grow as circles are accepted
    let mut circles: Vec<Circle> = Vec::new();

    for _ in 0..count {
        let mut circle = Circle::new(rng, config);

        match find_free_spot(rng, &circle, &circles, bounds, config) {
            Some(pos) => {
                circle.pos = pos;
                circles.push(circle);
            }
            None => {
                let error = SpawnError::CapacityExhausted {
                    requested: count,
                    spawned: circles.len(),
                };
                return SpawnReport {
                    circles,
                    error: Some(error),
                };
            }
        }
    }

    SpawnReport {
        circles,
        error: None,
    }
}

/// Sample candidate positions for `circle` until one clears `placed`
fn find_free_spot<R: Rng>(
    rng: &mut R,
    circle: &Circle,
    placed: &[Circle],
    bounds: Vec2,
    config: &SimConfig,
) -> Option<Vec2> {
    let min = Vec2::splat(circle.radius + config.spawn_offset);
    let max = bounds - Vec2::splat(circle.radius + config.spawn_offset);
    if max.x < min.x || max.y < min.y {
        // Window too small for this radius
        return None;
    }

    for _ in 0..config.max_spawn_attempts {
        let candidate = Vec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        );
        let clear = placed.iter().all(|other| {
            candidate.distance(other.pos) > circle.radius + other.radius
        });
        if clear {
            return Some(candidate);
        }
    }

    None
}
