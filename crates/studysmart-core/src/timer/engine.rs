//! Countdown engine implementation.
//!
//! The engine is a tick-driven state machine. It does not own a clock or
//! any threads - the presentation layer calls `tick()` once per elapsed
//! second while the timer is running.
//!
//! ## State Transitions
//!
//! ```text
//! {Focus, ShortBreak, LongBreak} x {Running, Paused}
//!
//! start/pause toggle the run bit; switch_mode and completion change the
//! mode and force Paused. tick() only acts while Running and is the sole
//! driver of completion. The cycle is unbounded.
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::TimerFinished) when an interval ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::{ModeDurations, TimerMode};
use crate::events::Event;

/// Every fourth completed focus cycle earns a long break.
pub const FOCUS_CYCLES_PER_LONG_BREAK: u64 = 4;

/// Core countdown engine.
///
/// Holds the full timer state: current mode, remaining seconds, run bit
/// and the completed-focus-cycle count. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    /// Remaining time in seconds for the current interval.
    /// Never exceeds the current mode's duration, never negative.
    remaining_secs: u64,
    is_running: bool,
    completed_focus_cycles: u64,
    durations: ModeDurations,
}

impl TimerEngine {
    /// Create an engine with the default mode table durations.
    ///
    /// Starts in Focus at full duration, paused, with zero cycles.
    pub fn new() -> Self {
        Self::with_durations(ModeDurations::default())
    }

    /// Create an engine with configured durations.
    pub fn with_durations(durations: ModeDurations) -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_secs: durations.for_mode(TimerMode::Focus),
            is_running: false,
            completed_focus_cycles: 0,
            durations,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn completed_focus_cycles(&self) -> u64 {
        self.completed_focus_cycles
    }

    pub fn durations(&self) -> &ModeDurations {
        &self.durations
    }

    /// Full duration of the current interval in seconds.
    pub fn duration_secs(&self) -> u64 {
        self.durations.for_mode(self.mode)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.duration_secs();
        if total == 0 {
            return 0.0;
        }
        (total - self.remaining_secs) as f64 / total as f64
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            mode_label: self.mode.label().to_string(),
            remaining_secs: self.remaining_secs,
            duration_secs: self.duration_secs(),
            progress: self.progress(),
            is_running: self.is_running,
            completed_focus_cycles: self.completed_focus_cycles,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. No-op when already running or when the
    /// interval has no time left.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running || self.remaining_secs == 0 {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Pause the countdown. Idempotent.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Flip between running and paused (the single start/pause button).
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and refill the current interval. Cycle count untouched.
    pub fn reset(&mut self) -> Event {
        self.is_running = false;
        self.remaining_secs = self.durations.for_mode(self.mode);
        Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Switch to `mode` at full duration, paused. Cycle count untouched.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        let from = self.mode;
        self.mode = mode;
        self.remaining_secs = self.durations.for_mode(mode);
        self.is_running = false;
        Event::ModeSwitched {
            from,
            to: mode,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Ignored while paused. Returns `Some(Event::TimerFinished)` on the
    /// tick that reaches zero; the engine has then already auto-switched
    /// to the next interval (full duration, paused).
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 {
            return Some(self.complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Interval completion: count focus cycles, pick the next mode and
    /// auto-switch with `switch_mode` semantics. Never resumes running.
    fn complete(&mut self) -> Event {
        let ended = self.mode;
        let next = match ended {
            TimerMode::Focus => {
                self.completed_focus_cycles += 1;
                if self.completed_focus_cycles % FOCUS_CYCLES_PER_LONG_BREAK == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Focus,
        };
        self.mode = next;
        self.remaining_secs = self.durations.for_mode(next);
        self.is_running = false;
        Event::TimerFinished {
            ended_mode: ended,
            ended_label: ended.label().to_string(),
            next_mode: next,
            completed_focus_cycles: self.completed_focus_cycles,
            at: Utc::now(),
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_engine() -> TimerEngine {
        TimerEngine::with_durations(ModeDurations {
            focus_secs: 3,
            short_break_secs: 2,
            long_break_secs: 4,
        })
    }

    #[test]
    fn new_engine_is_paused_focus_at_full_duration() {
        let engine = TimerEngine::new();
        assert_eq!(engine.mode(), TimerMode::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus_cycles(), 0);
    }

    #[test]
    fn start_pause_toggle() {
        let mut engine = TimerEngine::new();
        assert!(engine.start().is_some());
        assert!(engine.is_running());
        // Already running: no-op.
        assert!(engine.start().is_none());

        assert!(engine.pause().is_some());
        assert!(!engine.is_running());
        // Pause is idempotent.
        assert!(engine.pause().is_none());

        assert!(engine.toggle().is_some());
        assert!(engine.is_running());
        assert!(engine.toggle().is_some());
        assert!(!engine.is_running());
    }

    #[test]
    fn tick_while_paused_leaves_state_unchanged() {
        let mut engine = short_engine();
        for _ in 0..10 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.remaining_secs(), 3);
        assert_eq!(engine.mode(), TimerMode::Focus);
    }

    #[test]
    fn tick_decrements_while_running() {
        let mut engine = short_engine();
        engine.start();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 2);
    }

    #[test]
    fn focus_completion_switches_to_short_break_paused() {
        let mut engine = TimerEngine::with_durations(ModeDurations {
            focus_secs: 1,
            short_break_secs: 300,
            long_break_secs: 900,
        });
        engine.start();
        let event = engine.tick().expect("completion event");
        match event {
            Event::TimerFinished {
                ended_mode,
                ended_label,
                next_mode,
                completed_focus_cycles,
                ..
            } => {
                assert_eq!(ended_mode, TimerMode::Focus);
                assert_eq!(ended_label, "Focus Session");
                assert_eq!(next_mode, TimerMode::ShortBreak);
                assert_eq!(completed_focus_cycles, 1);
            }
            other => panic!("expected TimerFinished, got {other:?}"),
        }
        assert_eq!(engine.mode(), TimerMode::ShortBreak);
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_running());
    }

    #[test]
    fn break_completion_returns_to_focus() {
        let mut engine = short_engine();
        engine.switch_mode(TimerMode::ShortBreak);
        engine.start();
        engine.tick();
        let event = engine.tick().expect("break completion");
        match event {
            Event::TimerFinished {
                ended_mode,
                next_mode,
                completed_focus_cycles,
                ..
            } => {
                assert_eq!(ended_mode, TimerMode::ShortBreak);
                assert_eq!(next_mode, TimerMode::Focus);
                // Breaks never count as cycles.
                assert_eq!(completed_focus_cycles, 0);
            }
            other => panic!("expected TimerFinished, got {other:?}"),
        }
        assert_eq!(engine.mode(), TimerMode::Focus);
        assert!(!engine.is_running());
    }

    #[test]
    fn fourth_focus_cycle_earns_long_break() {
        let mut engine = short_engine();
        for cycle in 1..=4u64 {
            engine.switch_mode(TimerMode::Focus);
            engine.start();
            let mut finished = None;
            for _ in 0..3 {
                finished = engine.tick();
            }
            let event = finished.expect("focus completion");
            match event {
                Event::TimerFinished {
                    next_mode,
                    completed_focus_cycles,
                    ..
                } => {
                    assert_eq!(completed_focus_cycles, cycle);
                    if cycle == 4 {
                        assert_eq!(next_mode, TimerMode::LongBreak);
                    } else {
                        assert_eq!(next_mode, TimerMode::ShortBreak);
                    }
                }
                other => panic!("expected TimerFinished, got {other:?}"),
            }
        }
        assert_eq!(engine.mode(), TimerMode::LongBreak);
        assert_eq!(engine.remaining_secs(), 4);
    }

    #[test]
    fn switch_mode_refills_and_pauses() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        for mode in TimerMode::ALL {
            engine.switch_mode(mode);
            assert_eq!(engine.mode(), mode);
            assert_eq!(engine.remaining_secs(), engine.duration_secs());
            assert!(!engine.is_running());
        }
    }

    #[test]
    fn reset_refills_but_keeps_cycles() {
        let mut engine = TimerEngine::with_durations(ModeDurations {
            focus_secs: 1,
            short_break_secs: 2,
            long_break_secs: 2,
        });
        engine.start();
        engine.tick();
        assert_eq!(engine.completed_focus_cycles(), 1);

        engine.start();
        engine.tick();
        engine.reset();
        assert_eq!(engine.remaining_secs(), engine.duration_secs());
        assert!(!engine.is_running());
        assert_eq!(engine.completed_focus_cycles(), 1);
    }

    #[test]
    fn progress_fraction() {
        let mut engine = TimerEngine::with_durations(ModeDurations {
            focus_secs: 4,
            short_break_secs: 2,
            long_break_secs: 2,
        });
        assert_eq!(engine.progress(), 0.0);
        engine.start();
        engine.tick();
        assert!((engine.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_reflects_state() {
        let engine = TimerEngine::new();
        match engine.snapshot() {
            Event::StateSnapshot {
                mode,
                mode_label,
                remaining_secs,
                duration_secs,
                is_running,
                ..
            } => {
                assert_eq!(mode, TimerMode::Focus);
                assert_eq!(mode_label, "Focus Session");
                assert_eq!(remaining_secs, 1500);
                assert_eq!(duration_secs, 1500);
                assert!(!is_running);
            }
            other => panic!("expected StateSnapshot, got {other:?}"),
        }
    }
}
