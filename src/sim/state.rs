//! Game state and core simulation types
//!
//! `GameState` is owned by the frame driver and only mutated by
//! [`super::tick`]. Presentation reads a [`Snapshot`].

use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleField;
use super::physics::Player;
use super::rect::Rect;
use super::score::ScoreTracker;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended by a collision; waits for restart
    Over,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    Spawned,
    Crashed { final_score: u32 },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub obstacles: ObstacleField,
    pub score: ScoreTracker,
    /// Horizontal scroll speed, pixels/step
    pub speed: f32,
    pub phase: GamePhase,
    /// Floored score captured at the moment of the last crash
    pub final_score: Option<u32>,
    /// Steps executed while running, across restarts
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new running game
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(tuning),
            obstacles: ObstacleField::new(),
            score: ScoreTracker::new(),
            speed: tuning.scroll_speed,
            phase: GamePhase::Running,
            final_score: None,
            time_ticks: 0,
        }
    }

    /// Reset the run in place. The session high score is kept.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.player.reset(tuning.ground_y());
        self.obstacles.clear();
        self.score.reset();
        self.speed = tuning.scroll_speed;
        self.phase = GamePhase::Running;
        self.final_score = None;
    }

    /// Transition to `Over`, capturing the score before it is zeroed
    pub(crate) fn end_run(&mut self) -> u32 {
        let final_score = self.score.crash();
        self.final_score = Some(final_score);
        self.phase = GamePhase::Over;
        final_score
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Read-only view for the renderer and HUD
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.bounds(),
            obstacles: self.obstacles.iter().map(|o| o.bounds()).collect(),
            score: self.score.display_score(),
            high_score: self.score.display_high_score(),
            phase: self.phase,
            final_score: match self.phase {
                GamePhase::Over => self.final_score,
                GamePhase::Running => None,
            },
        }
    }
}

/// What the presentation layer is allowed to see each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    /// Only set while `phase == Over`
    pub final_score: Option<u32>,
}
