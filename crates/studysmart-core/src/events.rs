use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

/// Every timer state change produces an Event.
/// The presentation layer renders them; the notifier consumes `TimerFinished`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        from: TimerMode,
        to: TimerMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// An interval counted down to zero. The engine has already switched to
    /// `next_mode` (full duration, paused) when this is emitted.
    TimerFinished {
        ended_mode: TimerMode,
        ended_label: String,
        next_mode: TimerMode,
        completed_focus_cycles: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        mode_label: String,
        remaining_secs: u64,
        duration_secs: u64,
        progress: f64,
        is_running: bool,
        completed_focus_cycles: u64,
        at: DateTime<Utc>,
    },
}
