//! Pillar Dodge - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, level generation, collisions)
//! - `render`: Per-screen display-list construction for an external backend
//! - `settings`: Data-driven configuration (movement scaling, demo length)
//!
//! The low-level graphics binding, font rasterization and window/input
//! plumbing are external collaborators: the core emits draw commands and
//! consumes polled input, nothing more.

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{MovementScaling, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (fixed-size window)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player block is a 10x10 square driven by the pointer
    pub const PLAYER_SIZE: f32 = 10.0;

    /// Pillar width (both lanes)
    pub const OBSTACLE_WIDTH: f32 = 25.0;
    /// Horizontal spacing between consecutive pillar pairs
    pub const OBSTACLE_SPACING: f32 = 300.0;
    /// Vertical gap between a near pillar's top and its far partner's bottom
    pub const OBSTACLE_GAP: f32 = 40.0;
    /// Near-lane pillar heights are drawn uniformly from [MIN, MAX)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 540.0;
    /// Far-lane pillars are this much taller than their near partner
    pub const FAR_HEIGHT_EXTRA: f32 = 600.0;
    /// First pillar pair spawns this far right of the playfield origin
    pub const SPAWN_OFFSET: f32 = 800.0;
    /// Lane construction stops once accumulated width covers the playfield
    /// plus this margin
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Difficulty speeds (units per frame in per-frame scaling mode)
    pub const EASY_SPEED: f32 = 2.0;
    pub const MEDIUM_SPEED: f32 = 5.0;
    pub const HARD_SPEED: f32 = 10.0;

    /// Cloud drift per frame (leftward)
    pub const CLOUD_DRIFT: f32 = -1.0;

    /// Button dimensions on the start screen
    pub const BUTTON_WIDTH: f32 = 100.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;

    /// Frame rate at which time-scaled movement matches per-frame movement
    pub const REFERENCE_FRAME_RATE: f32 = 60.0;
}
