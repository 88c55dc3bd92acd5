//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame; only the spawn timer reads frame time
//! - No RNG
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::first_collision;
pub use obstacles::{Obstacle, ObstacleField};
pub use physics::{Player, apply_gravity};
pub use rect::Rect;
pub use score::ScoreTracker;
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
