//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous tick per frame
//! - Seeded RNG only (level layouts are reproducible)
//! - No rendering or platform dependencies

pub mod geom;
pub mod level;
pub mod scene;
pub mod state;
pub mod tick;

pub use geom::{Aabb, Shape, Tri, overlaps};
pub use level::{build_lanes, recycle};
pub use scene::{Cloud, Mountain, Rgba};
pub use state::{
    ButtonVisual, ClickState, Difficulty, DifficultyButton, GameState, Obstacle, Player, Screen,
};
pub use tick::{TickInput, tick};
