//! Player vs. obstacle collision detection

use super::obstacles::ObstacleField;
use super::physics::Player;

/// Index (in spawn order) of the first obstacle overlapping the player.
///
/// Stops at the first hit; any hit ends the run, so which one is reported
/// only matters for logging.
pub fn first_collision(player: &Player, field: &ObstacleField) -> Option<usize> {
    let player_box = player.bounds();
    field
        .iter()
        .position(|obstacle| player_box.overlaps(&obstacle.bounds()))
}
