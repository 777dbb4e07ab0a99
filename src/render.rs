//! Per-screen display-list construction
//!
//! The core never talks to a graphics API. Each frame it builds an ordered
//! list of [`DrawCmd`]s (back to front) and hands it to whatever backend is
//! attached; the commands carry everything a shape or text draw needs.

use glam::Vec2;

use crate::consts::*;
use crate::sim::geom::{Aabb, Shape, Tri};
use crate::sim::scene::{self, Rgba};
use crate::sim::state::{GameState, Screen};

/// One draw call for the external rendering service
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the frame to a solid color
    Clear { color: Rgba },
    /// Fill a shape; the closed [`Shape`] variant keeps the backend's
    /// dispatch exhaustive
    Shape { shape: Shape, color: Rgba },
    Text {
        text: String,
        pos: Vec2,
        scale: f32,
        color: Rgba,
    },
}

/// Glyph advance at scale 1.0; used to center text the same way the font
/// renderer lays it out
const GLYPH_WIDTH: f32 = 12.0;

const CLOUD_SIZE: Vec2 = Vec2::new(60.0, 30.0);

fn rect(body: &Aabb, color: Rgba) -> DrawCmd {
    DrawCmd::Shape {
        shape: Shape::Rect(*body),
        color,
    }
}

fn tri(shape: &Tri, color: Rgba) -> DrawCmd {
    DrawCmd::Shape {
        shape: Shape::Tri(*shape),
        color,
    }
}

/// Text horizontally centered on the playfield at the given height
fn centered_text(text: &str, y: f32) -> DrawCmd {
    DrawCmd::Text {
        pos: Vec2::new(PLAYFIELD_WIDTH / 2.0 - GLYPH_WIDTH * text.len() as f32, y),
        text: text.to_owned(),
        scale: 1.0,
        color: scene::WHITE,
    }
}

/// Build the display list for the current screen
pub fn draw_frame(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear {
        color: scene::SKY_BLUE,
    }];

    match state.screen {
        Screen::Start => {
            cmds.push(centered_text(
                "Welcome to Pillar Dodge",
                PLAYFIELD_HEIGHT / 1.3,
            ));
            cmds.push(centered_text(
                "Select your difficulty",
                PLAYFIELD_HEIGHT / 3.0,
            ));

            for button in &state.buttons {
                cmds.push(rect(&button.body, button.visual.fill()));
            }
            for button in &state.buttons {
                cmds.push(DrawCmd::Text {
                    text: button.difficulty.label().to_owned(),
                    pos: button.body.center + Vec2::new(-30.0, -5.0),
                    scale: 0.5,
                    color: scene::WHITE,
                });
            }

            cmds.push(rect(&state.player.body, scene::WHITE));
        }

        Screen::Play => {
            for mountain in &state.mountains {
                cmds.push(tri(&mountain.shape, scene::DARK_GREEN));
            }
            for cloud in &state.clouds {
                cmds.push(rect(&Aabb::new(cloud.pos, CLOUD_SIZE), scene::WHITE));
            }
            cmds.push(rect(&state.grass, scene::GRASS_GREEN));

            // Far lane behind the near lane
            for pillar in &state.far {
                cmds.push(rect(&pillar.body, pillar.color));
            }
            for pillar in &state.near {
                cmds.push(rect(&pillar.body, pillar.color));
            }

            cmds.push(rect(&state.player.body, scene::WHITE));

            let score = format!("Score: {}", state.score);
            cmds.push(DrawCmd::Text {
                pos: Vec2::new(
                    PLAYFIELD_WIDTH / 1.2 - GLYPH_WIDTH * score.len() as f32,
                    PLAYFIELD_HEIGHT / 1.1,
                ),
                text: score,
                scale: 1.0,
                color: scene::WHITE,
            });
        }

        Screen::Over => {
            cmds.push(centered_text("GAME OVER", PLAYFIELD_HEIGHT / 1.8));
            cmds.push(centered_text(
                &format!("Your score was {}", state.score),
                PLAYFIELD_HEIGHT / 2.2,
            ));
            cmds.push(centered_text("Press R to reset", PLAYFIELD_HEIGHT / 2.8));
        }
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MovementScaling;

    fn fresh(screen: Screen) -> GameState {
        let mut state = GameState::new(5, MovementScaling::PerFrame);
        state.screen = screen;
        state
    }

    fn count_rects(cmds: &[DrawCmd]) -> usize {
        cmds.iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCmd::Shape {
                        shape: Shape::Rect(_),
                        ..
                    }
                )
            })
            .count()
    }

    #[test]
    fn every_frame_starts_with_a_clear() {
        for screen in [Screen::Start, Screen::Play, Screen::Over] {
            let cmds = draw_frame(&fresh(screen));
            assert!(matches!(cmds[0], DrawCmd::Clear { .. }));
        }
    }

    #[test]
    fn start_screen_lists_buttons_and_player() {
        let cmds = draw_frame(&fresh(Screen::Start));
        // Three buttons plus the player block
        assert_eq!(count_rects(&cmds), 4);

        let labels: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"Easy"));
        assert!(labels.contains(&"Medium"));
        assert!(labels.contains(&"Hard"));
    }

    #[test]
    fn play_screen_draws_both_lanes_and_score() {
        let state = fresh(Screen::Play);
        let cmds = draw_frame(&state);

        // Clouds + grass + both lanes + player
        let expected = state.clouds.len() + 1 + state.near.len() + state.far.len() + 1;
        assert_eq!(count_rects(&cmds), expected);

        assert!(
            cmds.iter()
                .any(|c| matches!(c, DrawCmd::Text { text, .. } if text.starts_with("Score:")))
        );
        // Two mountains
        let tris = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCmd::Shape {
                        shape: Shape::Tri(_),
                        ..
                    }
                )
            })
            .count();
        assert_eq!(tris, 2);
    }

    #[test]
    fn over_screen_is_text_only() {
        let mut state = fresh(Screen::Over);
        state.score = 7;
        let cmds = draw_frame(&state);

        assert_eq!(count_rects(&cmds), 0);
        assert!(
            cmds.iter()
                .any(|c| matches!(c, DrawCmd::Text { text, .. } if text == "Your score was 7"))
        );
    }
}
