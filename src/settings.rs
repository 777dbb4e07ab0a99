//! Game settings and preferences
//!
//! Loaded once at startup from an optional JSON file next to the working
//! directory; anything missing or unparseable falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How pillar movement is scaled each frame.
///
/// The original game moved everything a fixed distance per frame, so speed
/// depended on the frame rate. Both behaviors are kept and configuration
/// picks; `TimeScaled` multiplies by delta time and matches `PerFrame` at
/// exactly 60 FPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementScaling {
    /// Fixed units per frame (retro behavior, the default)
    #[default]
    PerFrame,
    /// Units per frame scaled by `dt * 60`, frame-rate independent
    TimeScaled,
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Movement scaling mode
    pub movement: MovementScaling,
    /// Frames the headless demo binary runs before exiting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            movement: MovementScaling::PerFrame,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from the settings file, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings back out as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
