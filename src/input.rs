//! Intent queue between event handlers and the step function
//!
//! Event handlers never touch `GameState`; they set flags here and the next
//! frame drains them. Repeated requests before a drain collapse into one.

use crate::sim::{GamePhase, TickInput};

/// Pending player intents
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    jump: bool,
    restart: bool,
    /// Sticky mode, not consumed by `drain`
    autopilot: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_jump(&mut self) {
        self.jump = true;
    }

    pub fn request_restart(&mut self) {
        self.restart = true;
    }

    /// The single "action" button: restart a finished run, jump otherwise
    pub fn request_action(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::Over => self.request_restart(),
            GamePhase::Running => self.request_jump(),
        }
    }

    /// Flip demo mode; returns the new setting
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        self.autopilot
    }

    /// Take pending one-shot intents for the next tick
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            jump: std::mem::take(&mut self.jump),
            restart: std::mem::take(&mut self.restart),
            autopilot: self.autopilot,
        }
    }
}
