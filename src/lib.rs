//! RL Circles - bouncing circles that repel each other
//!
//! Core modules:
//! - `sim`: Simulation core (placement, kinematics, collisions)
//! - `renderer`: Draw list generation for the render surface
//! - `platform`: Render/input surface abstraction
//! - `settings`: Command-line settings

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ArgWarning, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Initial window dimensions
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 576.0;
    /// Frame pacing requested from the surface
    pub const TARGET_FPS: u32 = 60;

    /// Pointer hit area radius
    pub const MOUSE_RADIUS: f32 = 6.0;

    /// Circle defaults
    pub const CIRCLE_SPEED: f32 = 0.85; // units per frame
    pub const CIRCLE_RADIUS_MIN: f32 = 30.0;
    pub const CIRCLE_RADIUS_MAX: f32 = 60.0; // exclusive
    /// Margin kept from window edges when spawning
    pub const SPAWN_OFFSET: f32 = 10.0;

    /// Placement attempts per circle before spawning gives up
    pub const MAX_SPAWN_ATTEMPTS: u32 = 15;
    /// Circle count when none (or a bad one) is given on the command line
    pub const DEFAULT_CIRCLE_COUNT: usize = 15;
}
