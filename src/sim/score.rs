//! Running score and session high score

use serde::{Deserialize, Serialize};

/// Score for the current run plus the best score seen this session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Fractional score of the current run
    pub score: f32,
    /// Best score since the process started; survives restarts
    pub high_score: f32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one running step
    pub fn advance(&mut self, per_step: f32) {
        self.score += per_step;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// End the run: returns the floored final score and zeroes the live score.
    ///
    /// Anything displaying the result must use the returned value; the live
    /// field is already 0.
    pub fn crash(&mut self) -> u32 {
        let final_score = self.score.floor() as u32;
        self.score = 0.0;
        final_score
    }

    /// Start a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.score = 0.0;
    }

    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn display_high_score(&self) -> u32 {
        self.high_score.floor() as u32
    }
}
