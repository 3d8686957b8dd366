//! Simulation configuration and per-frame input
//!
//! Nothing in here reads ambient window or pointer state; the caller samples
//! the surface once per frame and hands the values in.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::circle::Circle;
use super::spawn::{SpawnError, SpawnReport, spawn_circles};
use crate::consts::*;

/// Construction-time tuning for circles and placement
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Pointer hit area radius used by the highlight test
    pub mouse_radius: f32,
    /// Distance travelled along `direction` each frame
    pub speed: f32,
    /// Margin kept from window edges during placement
    pub spawn_offset: f32,
    /// Radius range, `[radius_min, radius_max)`
    pub radius_min: f32,
    pub radius_max: f32,
    /// Candidate positions tried per circle before placement gives up
    pub max_spawn_attempts: u32,
    /// Constant external velocity added after the speed-scaled step (wind)
    pub drift: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mouse_radius: MOUSE_RADIUS,
            speed: CIRCLE_SPEED,
            spawn_offset: SPAWN_OFFSET,
            radius_min: CIRCLE_RADIUS_MIN,
            radius_max: CIRCLE_RADIUS_MAX,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            drift: Vec2::ZERO,
        }
    }
}

impl SimConfig {
    /// Config with every circle drawn at exactly `radius`
    pub fn with_fixed_radius(radius: f32) -> Self {
        Self {
            radius_min: radius,
            radius_max: radius,
            ..Self::default()
        }
    }
}

/// Environment sampled from the surface for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in window coordinates
    pub mouse: Vec2,
    /// Current window width/height
    pub bounds: Vec2,
}

impl FrameInput {
    pub fn new(mouse: Vec2, bounds: Vec2) -> Self {
        Self { mouse, bounds }
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            // Far off-screen so nothing is highlighted
            mouse: Vec2::splat(-1.0e6),
            bounds: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}

/// Seed wrapper so a run can be reproduced from its logged seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fresh seed from the thread RNG
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Entities and tuning for one session
///
/// Circles keep spawn order for the whole session; none are added or removed
/// after placement.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed the layout was generated from
    pub seed: u64,
    pub config: SimConfig,
    pub circles: Vec<Circle>,
    /// Frames stepped so far
    pub frame: u64,
}

impl Simulation {
    /// Place up to `count` circles and build the session around them
    ///
    /// The returned error is set when placement ran out of room; the session
    /// still holds every circle that was placed.
    pub fn spawn(
        rng_state: RngState,
        count: usize,
        bounds: Vec2,
        config: SimConfig,
    ) -> (Self, Option<SpawnError>) {
        let mut rng = rng_state.to_rng();
        let SpawnReport { circles, error } = spawn_circles(&mut rng, count, bounds, &config);
        let sim = Self {
            seed: rng_state.seed,
            config,
            circles,
            frame: 0,
        };
        (sim, error)
    }

    /// Session over an existing set of circles
    pub fn from_circles(circles: Vec<Circle>, config: SimConfig) -> Self {
        Self {
            seed: 0,
            config,
            circles,
            frame: 0,
        }
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter().filter(|c| c.highlighted)
    }
}
