//! Cosmetic scene objects and the color palette
//!
//! Clouds and mountains never participate in collision; they exist only so
//! the render dispatch has something to put behind the pillars.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use super::geom::Tri;

/// Straight RGBA, 0..1 per channel
pub type Rgba = [f32; 4];

pub const SKY_BLUE: Rgba = [77.0 / 255.0, 213.0 / 255.0, 240.0 / 255.0, 1.0];
pub const GRASS_GREEN: Rgba = [26.0 / 255.0, 176.0 / 255.0, 56.0 / 255.0, 1.0];
pub const DARK_GREEN: Rgba = [27.0 / 255.0, 81.0 / 255.0, 45.0 / 255.0, 1.0];
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const BRICK_RED: Rgba = [201.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0];
/// Tint applied to pillars the player has survived so far
pub const PASSED_GRAY: Rgba = [125.0 / 255.0, 128.0 / 255.0, 133.0 / 255.0, 1.0];

pub const BUTTON_IDLE: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const BUTTON_HOVER: Rgba = [0.75, 0.0, 0.0, 1.0];
pub const BUTTON_PRESSED: Rgba = [0.5, 0.0, 0.0, 1.0];

/// A drifting cloud. Purely decorative, wraps horizontally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    /// Horizontal drift per frame (negative = leftward)
    pub vel: f32,
}

impl Cloud {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: CLOUD_DRIFT,
        }
    }

    /// Drift horizontally, wrapping within [0, width]
    pub fn drift_within(&mut self, width: f32) {
        self.pos.x += self.vel;
        if self.pos.x < 0.0 {
            self.pos.x += width;
        } else if self.pos.x > width {
            self.pos.x -= width;
        }
    }
}

/// A static background mountain (triangle)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mountain {
    pub shape: Tri,
}

impl Mountain {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            shape: Tri::new(center, size),
        }
    }
}

/// The default cloud layout from the original scene
pub fn default_clouds() -> Vec<Cloud> {
    vec![
        Cloud::new(Vec2::new(200.0, 500.0)),
        Cloud::new(Vec2::new(400.0, 520.0)),
        Cloud::new(Vec2::new(325.0, 480.0)),
    ]
}

pub fn default_mountains() -> Vec<Mountain> {
    vec![
        Mountain::new(
            Vec2::new(PLAYFIELD_WIDTH / 4.0, 300.0),
            Vec2::new(PLAYFIELD_WIDTH, 400.0),
        ),
        Mountain::new(
            Vec2::new(2.0 * PLAYFIELD_WIDTH / 3.0, 300.0),
            Vec2::new(PLAYFIELD_WIDTH, 500.0),
        ),
    ]
}
