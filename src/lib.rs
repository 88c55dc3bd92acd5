//! Dino Runner - A side-scrolling jump-the-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `frame`: Host-agnostic frame driver (clock, intents, one step per frame)
//! - `input`: Intent queue between event handlers and the step function
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod frame;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use frame::{FrameClock, FrameOutcome, Game};
pub use input::InputQueue;
pub use tuning::{Tuning, TuningError};

/// Game configuration defaults (overridable through [`Tuning`])
pub mod consts {
    /// Canvas dimensions in pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 300.0;

    /// Player box - fixed horizontal position, rests on the floor
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Obstacle (cactus) box
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;

    /// Downward acceleration, pixels/step² (not scaled by frame time)
    pub const GRAVITY: f32 = 0.8;
    /// Initial vertical velocity of a jump, pixels/step (negative = up)
    pub const JUMP_VELOCITY: f32 = -12.0;

    /// Horizontal scroll speed, pixels/step
    pub const SCROLL_SPEED: f32 = 5.0;
    /// Time between obstacle spawns
    pub const SPAWN_INTERVAL_MS: f32 = 1500.0;

    /// Score added every running step
    pub const SCORE_PER_STEP: f32 = 0.1;
}
