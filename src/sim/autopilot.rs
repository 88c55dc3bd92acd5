//! Idle/demo mode: a trivial AI that jumps over incoming obstacles

use super::state::GameState;
use crate::tuning::Tuning;

/// Gap (in steps of scrolling) between the obstacle and the player's front
/// edge at which the AI jumps. Jumping earlier lands on the obstacle,
/// later clips it on the way up.
const LEAD_STEPS: f32 = 8.0;

/// Whether the AI wants to jump this step
pub fn wants_jump(state: &GameState, tuning: &Tuning) -> bool {
    if state.player.airborne {
        return false;
    }

    let front = state.player.x + state.player.width;
    let lead = LEAD_STEPS * tuning.scroll_speed;

    state
        .obstacles
        .iter()
        .map(|o| o.x - front)
        .any(|gap| gap >= 0.0 && gap <= lead)
}
