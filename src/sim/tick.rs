//! One simulation step per display frame
//!
//! Physics and scrolling advance by a fixed amount per step regardless of
//! frame time; only the spawn timer consumes `delta_ms`.

use super::autopilot;
use super::collision::first_collision;
use super::physics::apply_gravity;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Intents for a single tick, drained from the input queue
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (ignored while airborne or over)
    pub jump: bool,
    /// Restart (ignored while running)
    pub restart: bool,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
}

/// Advance the game state by one step
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    delta_ms: f32,
    tuning: &Tuning,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart && state.phase == GamePhase::Over {
        state.restart(tuning);
        log::info!("Run restarted (high score {})", state.score.display_high_score());
        events.push(GameEvent::Restarted);
    }

    // Nothing moves once the run is over
    if state.phase == GamePhase::Over {
        return events;
    }

    // Hosts should hand us monotonic timestamps; don't let a bad clock
    // rewind the spawn timer
    let delta_ms = delta_ms.max(0.0);

    let jump = input.jump || (input.autopilot && autopilot::wants_jump(state, tuning));

    state.time_ticks += 1;

    // Player
    if jump && state.player.jump(tuning.jump_velocity) {
        events.push(GameEvent::Jumped);
    }
    if apply_gravity(&mut state.player, tuning.gravity, tuning.ground_y()) {
        events.push(GameEvent::Landed);
    }

    // Obstacles: move existing ones first so a new spawn starts exactly at
    // the right edge
    state.obstacles.scroll(state.speed);
    if state.obstacles.tick_spawner(delta_ms, tuning) {
        log::debug!(
            "Spawned obstacle at tick {} ({} active)",
            state.time_ticks,
            state.obstacles.len()
        );
        events.push(GameEvent::Spawned);
    }

    if let Some(index) = first_collision(&state.player, &state.obstacles) {
        let final_score = state.end_run();
        log::info!(
            "Hit obstacle {} at tick {}: final score {}",
            index,
            state.time_ticks,
            final_score
        );
        events.push(GameEvent::Crashed { final_score });
        return events;
    }

    state.score.advance(tuning.score_per_step);

    events
}
