//! Game balance and geometry
//!
//! Every number the simulation uses lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document can override any subset of fields.
//! On the web the overrides are read from LocalStorage, natively from the
//! file named by `DINO_TUNING`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable constants for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ms: f32,
    pub score_per_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            score_per_step: SCORE_PER_STEP,
        }
    }
}

/// Rejected tuning document
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// Field must be a finite number > 0
    NotPositive(&'static str),
    /// Jump velocity must point upward (negative)
    JumpNotUpward(f32),
    /// Player does not fit between the top of the canvas and the floor
    PlayerTooTall { height: f32, canvas_height: f32 },
    /// One step would carry an obstacle clean past a grounded player
    ScrollTooFast { scroll_speed: f32, max: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::NotPositive(field) => {
                write!(f, "tuning field `{}` must be a positive number", field)
            }
            TuningError::JumpNotUpward(v) => {
                write!(f, "jump_velocity must be negative (upward), got {}", v)
            }
            TuningError::PlayerTooTall {
                height,
                canvas_height,
            } => write!(
                f,
                "player height {} does not fit in canvas height {}",
                height, canvas_height
            ),
            TuningError::ScrollTooFast { scroll_speed, max } => write!(
                f,
                "scroll_speed {} must be below {} (player_width + obstacle_width)",
                scroll_speed, max
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_runner_tuning";

    /// Environment variable naming a tuning file (native only)
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "DINO_TUNING";

    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the simulation can run with these numbers
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive(field));
            }
        }
        if !self.player_x.is_finite() {
            return Err(TuningError::NotPositive("player_x"));
        }
        if !(self.score_per_step.is_finite() && self.score_per_step >= 0.0) {
            return Err(TuningError::NotPositive("score_per_step"));
        }
        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return Err(TuningError::JumpNotUpward(self.jump_velocity));
        }
        if self.player_height > self.canvas_height {
            return Err(TuningError::PlayerTooTall {
                height: self.player_height,
                canvas_height: self.canvas_height,
            });
        }
        // Overlap window along x is player_width + obstacle_width wide
        let max_scroll = self.player_width + self.obstacle_width;
        if self.scroll_speed >= max_scroll {
            return Err(TuningError::ScrollTooFast {
                scroll_speed: self.scroll_speed,
                max: max_scroll,
            });
        }
        Ok(())
    }

    /// Floor line: bottom edge of every grounded box
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.canvas_height
    }

    /// Player's resting top edge (y grows downward)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.floor_y() - self.player_height
    }

    /// Obstacles sit on the same floor as the player
    #[inline]
    pub fn obstacle_y(&self) -> f32 {
        self.floor_y() - self.obstacle_height
    }

    /// Inline CSS giving the canvas its logical size on the page
    pub fn css_size(&self) -> String {
        format!(
            "width: {}px; height: {}px;",
            self.canvas_width, self.canvas_height
        )
    }

    /// Load overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load overrides from the file named by `DINO_TUNING` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        Self::load_from_path(&path)
    }

    /// Read a tuning file, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
