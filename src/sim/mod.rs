//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driver-supplied timestep, no internal clocks
//! - Seeded RNG only
//! - Stable obstacle order (spawn order = left-to-right world order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::body_obstacle_collision;
pub use obstacle::Obstacle;
pub use state::{ObstacleView, SimPhase, SimState, Snapshot};
pub use tick::{TickInput, tick};
