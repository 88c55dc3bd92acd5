//! Frame driver
//!
//! The host calls [`Game::frame`] from its display-refresh callback with a
//! millisecond timestamp. Each call drains pending intents and runs exactly
//! one simulation step. When the run ends the driver asks the host to stop
//! scheduling; a restart request re-arms it.

use crate::input::InputQueue;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, tick};
use crate::tuning::Tuning;

/// Turns host timestamps into per-step deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous frame.
    ///
    /// The first frame after creation or [`reset`](Self::reset) reports 0.
    /// A timestamp earlier than the previous one also reports 0.
    pub fn delta_ms(&mut self, now: f64) -> f32 {
        let delta = match self.last_timestamp {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now);
        delta as f32
    }

    /// Forget the previous timestamp (after the loop was stopped)
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// Result of one driven frame
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub outcome: FrameOutcome,
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    tuning: Tuning,
    input: InputQueue,
    clock: FrameClock,
    /// True while the host is expected to keep calling `frame`
    armed: bool,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(&tuning),
            tuning,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            armed: true,
        }
    }

    /// Run one step for the frame at `timestamp` (milliseconds)
    pub fn frame(&mut self, timestamp: f64) -> FrameReport {
        let delta_ms = self.clock.delta_ms(timestamp);
        let input = self.input.drain();
        let events = tick(&mut self.state, &input, delta_ms, &self.tuning);

        let outcome = match self.state.phase {
            GamePhase::Running => FrameOutcome::Continue,
            GamePhase::Over => {
                self.armed = false;
                FrameOutcome::Stop
            }
        };

        FrameReport { outcome, events }
    }

    /// Queue a jump. Dropped while the run is over.
    pub fn request_jump(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.input.request_jump();
        }
    }

    /// Queue a restart.
    ///
    /// Returns true when the frame loop was stopped and the host must
    /// schedule a frame again; the resumed frame starts with a zero delta.
    pub fn request_restart(&mut self) -> bool {
        if self.state.phase != GamePhase::Over {
            return false;
        }
        self.input.request_restart();
        if self.armed {
            return false;
        }
        self.armed = true;
        self.clock.reset();
        true
    }

    /// Single-button control: restart when over, jump otherwise.
    ///
    /// Returns true when the host must re-arm the frame loop.
    pub fn request_action(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Over => self.request_restart(),
            GamePhase::Running => {
                self.input.request_action(GamePhase::Running);
                false
            }
        }
    }

    /// Drive fixed-rate frames from `start` until the loop stops.
    ///
    /// Gives up after `max_frames`. Returns the timestamp of the last frame
    /// driven and whether the loop stopped.
    pub fn run_until_stopped(&mut self, start: f64, frame_ms: f64, max_frames: u32) -> (f64, bool) {
        let mut t = start;
        for _ in 0..max_frames {
            if self.frame(t).outcome == FrameOutcome::Stop {
                return (t, true);
            }
            t += frame_ms;
        }
        (t, false)
    }

    pub fn toggle_autopilot(&mut self) -> bool {
        let on = self.input.toggle_autopilot();
        log::info!("Autopilot: {}", if on { "on" } else { "off" });
        on
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Drive frames until the loop stops; returns the last timestamp used
    fn run_until_stop(game: &mut Game, mut t: f64) -> f64 {
        for _ in 0..10_000 {
            t += FRAME_MS;
            if game.frame(t).outcome == FrameOutcome::Stop {
                return t;
            }
        }
        panic!("game never ended");
    }

    #[test]
    fn test_clock_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_ms(12_345.0), 0.0);
        assert_eq!(clock.delta_ms(12_361.0), 16.0);
        assert_eq!(clock.delta_ms(12_300.0), 0.0);
        clock.reset();
        assert_eq!(clock.delta_ms(99_999.0), 0.0);
    }

    #[test]
    fn test_loop_stops_on_crash_and_rearms_on_restart() {
        let mut game = Game::new(Tuning::default());
        assert!(game.is_armed());

        let t = run_until_stop(&mut game, 1000.0);
        assert!(!game.is_armed());
        assert_eq!(game.phase(), GamePhase::Over);

        let snap = game.snapshot();
        assert_eq!(snap.score, 0);
        assert!(snap.final_score.is_some());

        // Jumps are dropped while over
        game.request_jump();

        // First restart re-arms, repeated requests don't
        assert!(game.request_restart());
        assert!(!game.request_restart());
        assert!(game.is_armed());

        // Long pause before the next frame must not count toward spawning
        let report = game.frame(t + 60_000.0);
        assert_eq!(report.outcome, FrameOutcome::Continue);
        assert_eq!(report.events, vec![GameEvent::Restarted]);
        assert_eq!(game.state().obstacles.since_last_spawn_ms, 0.0);
        assert!(game.state().obstacles.is_empty());
        assert!(!game.state().player.airborne);
        assert_eq!(game.snapshot().final_score, None);
    }

    #[test]
    fn test_restart_while_running_does_nothing() {
        let mut game = Game::new(Tuning::default());
        game.frame(0.0);
        assert!(!game.request_restart());
        let report = game.frame(FRAME_MS);
        assert!(!report.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_action_button() {
        let mut game = Game::new(Tuning::default());
        game.frame(0.0);
        assert!(!game.request_action());
        let report = game.frame(FRAME_MS);
        assert_eq!(report.events, vec![GameEvent::Jumped]);

        let t = run_until_stop(&mut game, FRAME_MS);
        assert!(game.request_action());
        let report = game.frame(t + FRAME_MS);
        assert_eq!(report.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_autopilot_keeps_running() {
        let mut game = Game::new(Tuning::default());
        game.toggle_autopilot();
        let mut t = 0.0;
        for _ in 0..3000 {
            assert_eq!(game.frame(t).outcome, FrameOutcome::Continue);
            t += FRAME_MS;
        }
        assert!(game.snapshot().score >= 299);
    }

    #[test]
    fn test_run_until_stopped_crashes_at_top_speed() {
        let tuning = Tuning::from_json(r#"{ "scroll_speed": 55 }"#).unwrap();
        let mut game = Game::new(tuning);
        let (_, stopped) = game.run_until_stopped(0.0, FRAME_MS, 600);
        assert!(stopped);
        assert!(!game.is_armed());
        assert_eq!(game.phase(), GamePhase::Over);
    }

    #[test]
    fn test_run_until_stopped_gives_up() {
        // Nothing spawns within the budget, so nothing can hit the player
        let tuning = Tuning::from_json(r#"{ "spawn_interval_ms": 1e9 }"#).unwrap();
        let mut game = Game::new(tuning);
        let (t, stopped) = game.run_until_stopped(0.0, FRAME_MS, 600);
        assert!(!stopped);
        assert!(game.is_armed());
        assert_eq!(game.state().time_ticks, 600);
        assert!((t - 600.0 * FRAME_MS).abs() < 1e-6);
    }
}
