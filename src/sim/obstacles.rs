//! Obstacle spawning and scrolling
//!
//! Obstacles enter at the right edge on a fixed timer and move left by a
//! constant amount every step. The field is kept in spawn order, so the
//! leftmost entry is always the oldest.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// A single obstacle resting on the floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fully past the left edge of the canvas
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x <= -self.width
    }
}

/// Active obstacles plus the fixed-interval spawn timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Milliseconds accumulated since the last spawn
    pub since_last_spawn_ms: f32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every obstacle left and drop the ones that left the canvas
    pub fn scroll(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
        self.obstacles.retain(|o| !o.is_offscreen());
    }

    /// Accumulate frame time; spawn once the interval has elapsed.
    ///
    /// The timer restarts from zero rather than carrying the remainder, so a
    /// long stall produces a single obstacle, not a burst.
    pub fn tick_spawner(&mut self, delta_ms: f32, tuning: &Tuning) -> bool {
        self.since_last_spawn_ms += delta_ms;
        if self.since_last_spawn_ms >= tuning.spawn_interval_ms {
            self.spawn(tuning);
            self.since_last_spawn_ms = 0.0;
            return true;
        }
        false
    }

    /// Add an obstacle at the right edge of the canvas
    pub fn spawn(&mut self, tuning: &Tuning) {
        self.obstacles.push(Obstacle {
            x: tuning.canvas_width,
            y: tuning.obstacle_y(),
            width: tuning.obstacle_width,
            height: tuning.obstacle_height,
        });
    }

    /// Remove all obstacles and restart the spawn timer
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.since_last_spawn_ms = 0.0;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Move the newest obstacle to `x` (test setup)
    #[cfg(test)]
    pub(crate) fn place_last(&mut self, x: f32) {
        if let Some(o) = self.obstacles.last_mut() {
            o.x = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_at_right_edge_on_floor() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        field.spawn(&tuning);
        let o = &field.as_slice()[0];
        assert_eq!(o.x, 800.0);
        assert_eq!(o.y + o.height, tuning.floor_y());
    }

    #[test]
    fn test_fixed_interval_spawner() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();

        // 16ms frames: 1500ms is crossed on frame 94 (94 * 16 = 1504)
        let mut spawned_on = Vec::new();
        for frame in 1..=200 {
            if field.tick_spawner(16.0, &tuning) {
                spawned_on.push(frame);
            }
        }
        assert_eq!(spawned_on, vec![94, 188]);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_long_stall_spawns_once() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        assert!(field.tick_spawner(10_000.0, &tuning));
        assert_eq!(field.len(), 1);
        assert_eq!(field.since_last_spawn_ms, 0.0);
    }

    #[test]
    fn test_offscreen_obstacles_are_culled_in_order() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        field.spawn(&tuning);
        field.obstacles[0].x = -15.0; // one step from leaving
        field.spawn(&tuning);
        field.obstacles[1].x = 400.0;
        field.spawn(&tuning);

        field.scroll(5.0);
        let xs: Vec<f32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![395.0, 795.0]);
    }

    #[test]
    fn test_obstacle_leaves_after_full_traversal() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        field.spawn(&tuning);

        // 800 / 5 = 160 steps to reach x = 0
        for _ in 0..160 {
            field.scroll(5.0);
        }
        assert_eq!(field.as_slice()[0].x, 0.0);

        // 4 more to reach x = -20 = -width, which is culled
        for _ in 0..4 {
            field.scroll(5.0);
        }
        assert!(field.is_empty());
    }

    proptest! {
        #[test]
        fn prop_scroll_is_linear(steps in 0usize..150, speed in 1.0f32..8.0) {
            let tuning = Tuning::default();
            let mut field = ObstacleField::new();
            field.spawn(&tuning);
            for _ in 0..steps {
                field.scroll(speed);
            }
            let x0 = tuning.canvas_width;
            let expected = x0 - steps as f32 * speed;
            if expected > -tuning.obstacle_width + 0.5 {
                let x = field.as_slice()[0].x;
                prop_assert!((x - expected).abs() < 0.05);
            }
            for o in field.iter() {
                prop_assert!(o.x > -o.width);
            }
        }
    }
}
