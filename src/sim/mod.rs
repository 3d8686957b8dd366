//! Simulation module
//!
//! All circle logic lives here:
//! - Placement without overlap (seeded RNG only)
//! - Per-frame kinematics, wall reflection and pointer highlight
//! - All-pairs collision repulsion
//! - No rendering or platform dependencies

pub mod circle;
pub mod collision;
pub mod policy;
pub mod spawn;
pub mod state;
pub mod tick;

pub use circle::Circle;
pub use collision::{repulsion_direction, resolve_collisions};
pub use policy::{contain, is_highlighted, reflect_walls};
pub use spawn::{SpawnError, SpawnReport, spawn_circles};
pub use state::{FrameInput, RngState, SimConfig, Simulation};
pub use tick::{StepStats, step};
