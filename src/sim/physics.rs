//! Vertical kinematics for the player
//!
//! Per-step semi-implicit Euler: velocity is updated first, then position.
//! Nothing here is scaled by frame time; a faster display runs the game
//! faster, same as the scrolling.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal position (left edge)
    pub x: f32,
    /// Top edge, clamped to `[0, ground_y]`
    pub y: f32,
    /// Vertical velocity in pixels/step (negative = up)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
    /// True while above the ground; false exactly when `y == ground_y`
    pub airborne: bool,
}

impl Player {
    /// Create a grounded player
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.ground_y(),
            velocity: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
            airborne: false,
        }
    }

    /// Put the player back on the ground, at rest
    pub fn reset(&mut self, ground_y: f32) {
        self.y = ground_y;
        self.velocity = 0.0;
        self.airborne = false;
    }

    /// Start a jump. Ignored while already airborne.
    ///
    /// Returns whether the jump was taken.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = jump_velocity;
        true
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Advance one step of gravity. Grounded players are left untouched.
///
/// Returns true on the step the player lands.
pub fn apply_gravity(player: &mut Player, gravity: f32, ground_y: f32) -> bool {
    if !player.airborne {
        return false;
    }

    player.velocity += gravity;
    // Top of canvas is a ceiling
    player.y = (player.y + player.velocity).max(0.0);

    if player.y >= ground_y {
        player.reset(ground_y);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GROUND: f32 = 260.0;

    #[test]
    fn test_grounded_player_is_untouched() {
        let mut p = Player::new(&Tuning::default());
        let landed = apply_gravity(&mut p, 0.8, GROUND);
        assert!(!landed);
        assert_eq!(p.y, GROUND);
        assert_eq!(p.velocity, 0.0);
        assert!(!p.airborne);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let mut p = Player::new(&Tuning::default());
        assert!(p.jump(-12.0));
        apply_gravity(&mut p, 0.8, GROUND);
        let (y, v) = (p.y, p.velocity);

        assert!(!p.jump(-12.0));
        assert_eq!(p.y, y);
        assert_eq!(p.velocity, v);
        assert!(p.airborne);
    }

    #[test]
    fn test_jump_lands_when_integration_reaches_ground() {
        let mut p = Player::new(&Tuning::default());
        p.jump(-12.0);

        // Reference integration with the same arithmetic
        let mut ref_y = GROUND;
        let mut ref_v = -12.0f32;
        let mut expected_step = 0;
        for step in 1..100 {
            ref_v += 0.8;
            ref_y += ref_v;
            if ref_y >= GROUND {
                expected_step = step;
                break;
            }
        }

        let mut landed_at = 0;
        for step in 1..100 {
            if apply_gravity(&mut p, 0.8, GROUND) {
                landed_at = step;
                break;
            }
            assert!(p.airborne);
            assert!(p.y < GROUND);
        }

        assert_eq!(landed_at, expected_step);
        // Closed form: y_n = 260 - 12n + 0.4n(n+1) first reaches 260 at n = 29
        assert!((29..=30).contains(&landed_at));
        assert!(!p.airborne);
        assert_eq!(p.y, GROUND);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_jump_apex_height() {
        let mut p = Player::new(&Tuning::default());
        p.jump(-12.0);
        let mut min_y = p.y;
        while p.airborne {
            apply_gravity(&mut p, 0.8, GROUND);
            min_y = min_y.min(p.y);
        }
        // 15 rising steps: 12*15 - 0.4*15*16 = 84 px
        assert!((GROUND - min_y - 84.0).abs() < 0.01);
    }

    proptest! {
        #[test]
        fn prop_gravity_step(
            y in 0.0f32..GROUND,
            v in -15.0f32..15.0,
            g in 0.6f32..0.8,
        ) {
            let mut p = Player::new(&Tuning::default());
            p.y = y;
            p.velocity = v;
            p.airborne = true;

            apply_gravity(&mut p, g, GROUND);

            let v_after = v + g;
            let y_after = (y + v_after).max(0.0);
            if y_after >= GROUND {
                prop_assert_eq!(p.y, GROUND);
                prop_assert!(!p.airborne);
            } else {
                prop_assert_eq!(p.velocity, v_after);
                prop_assert_eq!(p.y, y_after);
                prop_assert!(p.airborne);
            }
            prop_assert!(p.y >= 0.0 && p.y <= GROUND);
        }
    }
}
