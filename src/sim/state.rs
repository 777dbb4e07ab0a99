//! Game state and core simulation types
//!
//! Everything the session owns lives in [`GameState`]: no globals, no shared
//! ownership. Reset rebuilds the obstacle collections wholesale.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use super::level;
use super::scene::{self, Cloud, Mountain, Rgba};
use crate::consts::*;
use crate::settings::MovementScaling;

/// Current screen of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Menu with the three difficulty buttons
    #[default]
    Start,
    /// Simulation running, score accumulating
    Play,
    /// Terminal display, waiting for the reset key
    Over,
}

/// Difficulty selection; the associated speed becomes the lane scroll speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn speed(&self) -> f32 {
        match self {
            Difficulty::Easy => EASY_SPEED,
            Difficulty::Medium => MEDIUM_SPEED,
            Difficulty::Hard => HARD_SPEED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Visual tri-state of an interactive button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonVisual {
    #[default]
    Idle,
    Hover,
    Pressed,
}

impl ButtonVisual {
    pub fn fill(&self) -> Rgba {
        match self {
            ButtonVisual::Idle => scene::BUTTON_IDLE,
            ButtonVisual::Hover => scene::BUTTON_HOVER,
            ButtonVisual::Pressed => scene::BUTTON_PRESSED,
        }
    }
}

/// A difficulty button on the start screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DifficultyButton {
    pub difficulty: Difficulty,
    pub body: Aabb,
    pub visual: ButtonVisual,
}

impl DifficultyButton {
    pub fn new(difficulty: Difficulty, center: Vec2) -> Self {
        Self {
            difficulty,
            body: Aabb::new(center, Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT)),
            visual: ButtonVisual::Idle,
        }
    }
}

/// Pointer-button edge detection, advanced exactly once per frame.
///
/// `Released` is the one-frame transition from down to up; selections fire
/// on it so the click that reached the Start screen cannot immediately
/// re-trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClickState {
    #[default]
    Idle,
    Pressed,
    Released,
}

impl ClickState {
    pub fn advance(self, down: bool) -> Self {
        if down {
            ClickState::Pressed
        } else if self == ClickState::Pressed {
            ClickState::Released
        } else {
            ClickState::Idle
        }
    }
}

/// The player's block, driven by the pointer and clamped to the playfield
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub body: Aabb,
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Aabb::new(Vec2::ZERO, Vec2::splat(PLAYER_SIZE)),
        }
    }

    /// Center the block on the (already y-inverted) pointer position, then
    /// pin any edge that left the playfield back onto the boundary.
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        self.body.set_center(pointer);

        let half = self.body.size / 2.0;
        let mut c = self.body.center;
        if self.body.top() >= PLAYFIELD_HEIGHT {
            c.y = PLAYFIELD_HEIGHT - half.y;
        }
        if self.body.bottom() <= 0.0 {
            c.y = half.y;
        }
        if self.body.left() <= 0.0 {
            c.x = half.x;
        }
        if self.body.right() >= PLAYFIELD_WIDTH {
            c.x = PLAYFIELD_WIDTH - half.x;
        }
        self.body.set_center(c);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A pillar in one of the two lanes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Aabb,
    pub color: Rgba,
}

impl Obstacle {
    pub fn new(body: Aabb) -> Self {
        Self {
            body,
            color: scene::BRICK_RED,
        }
    }
}

/// RNG state wrapper; the stream index bumps on every level rebuild so each
/// reset gets a fresh but reproducible layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub screen: Screen,
    /// Pillar pairs survived this run
    pub score: u32,
    /// Lane scroll speed, set at difficulty selection; survives reset
    pub move_speed: f32,
    /// Per-frame vs time-scaled displacement (config-selected)
    pub scaling: MovementScaling,
    /// Pointer-button edge state, shared by all buttons
    pub click: ClickState,
    /// Frame counter
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed left-to-right selection priority: Easy, Medium, Hard
    pub buttons: [DifficultyButton; 3],
    /// Near lane; drives scoring
    pub near: Vec<Obstacle>,
    /// Far lane; index-paired with `near`, recycles silently
    pub far: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub mountains: Vec<Mountain>,
    pub grass: Aabb,
}

impl GameState {
    pub fn new(seed: u64, scaling: MovementScaling) -> Self {
        let buttons = [
            DifficultyButton::new(
                Difficulty::Easy,
                Vec2::new(PLAYFIELD_WIDTH / 3.0, PLAYFIELD_HEIGHT / 2.0),
            ),
            DifficultyButton::new(
                Difficulty::Medium,
                Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            ),
            DifficultyButton::new(
                Difficulty::Hard,
                Vec2::new(PLAYFIELD_WIDTH / 1.5, PLAYFIELD_HEIGHT / 2.0),
            ),
        ];

        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            screen: Screen::Start,
            score: 0,
            move_speed: EASY_SPEED,
            scaling,
            click: ClickState::Idle,
            time_ticks: 0,
            player: Player::new(),
            buttons,
            near: Vec::new(),
            far: Vec::new(),
            clouds: scene::default_clouds(),
            mountains: scene::default_mountains(),
            grass: Aabb::new(
                Vec2::new(PLAYFIELD_WIDTH / 2.0, 50.0),
                Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT / 3.0),
            ),
        };

        state.rebuild_level();
        state
    }

    /// Clear and regenerate both lanes from the next RNG stream
    pub fn rebuild_level(&mut self) {
        let mut rng = self.rng_state.to_rng();
        self.rng_state.stream += 1;
        let (near, far) = level::build_lanes(&mut rng);
        self.near = near;
        self.far = far;
    }

    /// Over -> Start transition: zero the score and rebuild the level.
    /// The selected difficulty deliberately persists until re-chosen.
    pub fn reset(&mut self) {
        log::info!("reset: final score {}", self.score);
        self.score = 0;
        self.rebuild_level();
        self.clouds = scene::default_clouds();
        self.screen = Screen::Start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_state_edges() {
        let s = ClickState::Idle;
        let s = s.advance(true);
        assert_eq!(s, ClickState::Pressed);
        let s = s.advance(true);
        assert_eq!(s, ClickState::Pressed);
        let s = s.advance(false);
        assert_eq!(s, ClickState::Released);
        let s = s.advance(false);
        assert_eq!(s, ClickState::Idle);
        // Released -> down again is a fresh press
        assert_eq!(ClickState::Released.advance(true), ClickState::Pressed);
    }

    #[test]
    fn player_clamps_to_every_edge() {
        let mut p = Player::new();

        p.follow_pointer(Vec2::new(400.0, 1000.0));
        assert_eq!(p.body.top(), PLAYFIELD_HEIGHT);

        p.follow_pointer(Vec2::new(400.0, -50.0));
        assert_eq!(p.body.bottom(), 0.0);

        p.follow_pointer(Vec2::new(-50.0, 300.0));
        assert_eq!(p.body.left(), 0.0);

        p.follow_pointer(Vec2::new(5000.0, 300.0));
        assert_eq!(p.body.right(), PLAYFIELD_WIDTH);
    }

    #[test]
    fn player_follows_pointer_inside_field() {
        let mut p = Player::new();
        p.follow_pointer(Vec2::new(123.0, 456.0));
        assert_eq!(p.body.center, Vec2::new(123.0, 456.0));
    }

    #[test]
    fn reset_zeroes_score_and_rebuilds() {
        let mut state = GameState::new(7, MovementScaling::PerFrame);
        state.screen = Screen::Over;
        state.score = 12;
        state.move_speed = HARD_SPEED;
        let old_first_x = state.near[0].body.center.x;

        state.reset();
        assert_eq!(state.screen, Screen::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.move_speed, HARD_SPEED);
        assert!(!state.near.is_empty());
        // Fresh stream, but the first pillar always spawns at the same x
        assert_eq!(state.near[0].body.center.x, old_first_x);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = GameState::new(42, MovementScaling::PerFrame);
        let b = GameState::new(42, MovementScaling::PerFrame);
        assert_eq!(a.near.len(), b.near.len());
        for (x, y) in a.near.iter().zip(&b.near) {
            assert_eq!(x.body, y.body);
        }
    }
}
