//! Per-frame simulation step
//!
//! One synchronous tick per rendered frame: advance the click edge state,
//! position the player, run whichever screen is active. The Play branch
//! moves both lanes, recycles off-screen pillars, scores, and checks the
//! collision-to-loss transition.

use glam::Vec2;

use super::level;
use super::scene;
use super::state::{ClickState, GameState, Obstacle, Screen};
use crate::consts::*;
use crate::settings::MovementScaling;

/// Polled input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in window coordinates (origin top-left, y down)
    pub pointer: Vec2,
    /// Pointer button held this frame
    pub pointer_down: bool,
    /// Reset key held (only observed on the Over screen)
    pub reset: bool,
    /// Demo autopilot synthesizes pointer input
    pub idle_mode: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.click = state.click.advance(input.pointer_down);

    // Window coordinates have the origin top-left; the playfield origin is
    // bottom-left, so the pointer's y axis is inverted before use.
    let pointer = Vec2::new(input.pointer.x, PLAYFIELD_HEIGHT - input.pointer.y);
    state.player.follow_pointer(pointer);

    match state.screen {
        Screen::Start => update_buttons(state, input),
        Screen::Over => {
            if input.reset {
                state.reset();
            }
        }
        Screen::Play => {
            let step = frame_step(state.move_speed, state.scaling, dt);

            for cloud in &mut state.clouds {
                cloud.drift_within(PLAYFIELD_WIDTH);
            }

            // Only the near lane drives scoring; the far lane stays in sync
            // but recycles silently.
            let recycled = advance_lane(&mut state.near, step);
            if recycled > 0 {
                state.score += recycled;
                log::info!("score: {}", state.score);
            }
            advance_lane(&mut state.far, step);

            check_collision(state);
        }
    }
}

/// Displacement applied to every pillar this frame
fn frame_step(move_speed: f32, scaling: MovementScaling, dt: f32) -> f32 {
    match scaling {
        MovementScaling::PerFrame => move_speed,
        MovementScaling::TimeScaled => move_speed * dt * REFERENCE_FRAME_RATE,
    }
}

/// Hover/press visuals plus the release-click selection edge. Buttons are
/// checked in fixed left-to-right priority (Easy, Medium, Hard) and at most
/// one selection fires per click.
fn update_buttons(state: &mut GameState, input: &TickInput) {
    use super::state::ButtonVisual;

    let player = state.player.body;
    let released = state.click == ClickState::Released;
    let mut selected = None;

    for button in &mut state.buttons {
        let hovered = button.body.overlaps(&player);
        button.visual = if input.pointer_down && hovered {
            ButtonVisual::Pressed
        } else if hovered {
            ButtonVisual::Hover
        } else {
            ButtonVisual::Idle
        };

        if selected.is_none() && released && hovered {
            selected = Some(button.difficulty);
        }
    }

    if let Some(difficulty) = selected {
        state.move_speed = difficulty.speed();
        state.screen = Screen::Play;
        log::info!("{} selected, speed {}", difficulty.label(), state.move_speed);
    }
}

/// Move a lane left and recycle anything that scrolled off. Returns the
/// number of recycle events.
fn advance_lane(lane: &mut [Obstacle], step: f32) -> u32 {
    let mut recycled = 0;
    for i in 0..lane.len() {
        lane[i].body.translate_x(-step);
        if level::has_scrolled_off(&lane[i].body) {
            level::recycle(lane, i);
            recycled += 1;
        }
    }
    recycled
}

/// Test the player against every pillar in both lanes. Pillars the player
/// is not touching pick up the "passed" tint even on the losing frame, so
/// the last rendered frame stays visually consistent.
fn check_collision(state: &mut GameState) {
    let player = state.player.body;
    let mut hit = false;

    for pillar in state.near.iter_mut().chain(state.far.iter_mut()) {
        if pillar.body.overlaps(&player) {
            hit = true;
        } else {
            pillar.color = scene::PASSED_GRAY;
        }
    }

    if hit {
        log::info!("crashed, final score {}", state.score);
        state.screen = Screen::Over;
    }
}

/// Demo-mode input synthesis: click Easy from the menu, then hold a fixed x
/// and steer into the center of the nearest upcoming gap; press reset on
/// the Over screen.
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.screen {
        Screen::Start => {
            let easy = state.buttons[0].body.center;
            input.pointer = Vec2::new(easy.x, PLAYFIELD_HEIGHT - easy.y);
            // Two-frame press/release through the click state machine
            input.pointer_down = state.click != ClickState::Pressed;
        }
        Screen::Play => {
            let x = 120.0;
            // Stay in the current pair's gap until its pillar fully clears
            // the player's left edge; only then hop to the next gap.
            let target = state
                .near
                .iter()
                .filter(|o| o.body.right() >= x - PLAYER_SIZE / 2.0)
                .min_by(|a, b| {
                    a.body
                        .center
                        .x
                        .partial_cmp(&b.body.center.x)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            let gap_y = target
                .map(|o| o.body.top() + OBSTACLE_GAP / 2.0)
                .unwrap_or(PLAYFIELD_HEIGHT / 2.0);
            input.pointer = Vec2::new(x, PLAYFIELD_HEIGHT - gap_y);
            input.pointer_down = false;
        }
        Screen::Over => {
            input.reset = true;
        }
    }
}
