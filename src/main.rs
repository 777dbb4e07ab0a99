//! Pillar Dodge entry point
//!
//! The window, input and graphics services are external collaborators, so
//! this binary drives the simulation headlessly: the demo autopilot plays
//! the game for a fixed frame budget while each frame's display list is
//! built and dropped. Set `PILLAR_DODGE_SEED` for a reproducible run.

use std::time::Instant;

use pillar_dodge::render::draw_frame;
use pillar_dodge::settings::Settings;
use pillar_dodge::sim::{GameState, TickInput, tick};

/// Frame time assumed when the clock reads zero elapsed (first frame, or a
/// loop iteration faster than the timer resolution)
const FALLBACK_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Pillar Dodge starting");

    let settings = Settings::load();

    let seed = std::env::var("PILLAR_DODGE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("seed {seed}, movement {:?}", settings.movement);

    let mut state = GameState::new(seed, settings.movement);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut last = Instant::now();
    for _ in 0..settings.demo_frames {
        let now = Instant::now();
        let mut dt = now.duration_since(last).as_secs_f32();
        if dt <= 0.0 {
            dt = FALLBACK_DT;
        }
        last = now;

        tick(&mut state, &input, dt);
        let cmds = draw_frame(&state);
        log::trace!("frame {}: {} draw commands", state.time_ticks, cmds.len());
    }

    log::info!(
        "demo finished after {} frames, final score {}",
        state.time_ticks,
        state.score
    );
}
