use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The three intervals of the study cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

/// Static per-mode configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Default duration in seconds.
    pub duration_secs: u64,
    pub label: &'static str,
    /// Display color (hex).
    pub color: &'static str,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [
        TimerMode::Focus,
        TimerMode::ShortBreak,
        TimerMode::LongBreak,
    ];

    /// The static mode table. Keyed by the enumeration, not by strings.
    pub const fn profile(self) -> ModeProfile {
        match self {
            TimerMode::Focus => ModeProfile {
                duration_secs: 25 * 60,
                label: "Focus Session",
                color: "#8b5cf6",
            },
            TimerMode::ShortBreak => ModeProfile {
                duration_secs: 5 * 60,
                label: "Short Break",
                color: "#3b82f6",
            },
            TimerMode::LongBreak => ModeProfile {
                duration_secs: 15 * 60,
                label: "Long Break",
                color: "#22c55e",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.profile().label
    }

    pub const fn color(self) -> &'static str {
        self.profile().color
    }

    pub const fn default_duration_secs(self) -> u64 {
        self.profile().duration_secs
    }

    pub const fn is_break(self) -> bool {
        matches!(self, TimerMode::ShortBreak | TimerMode::LongBreak)
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short-break",
            TimerMode::LongBreak => "long-break",
        };
        f.write_str(s)
    }
}

impl FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" => Ok(TimerMode::Focus),
            "short" | "short-break" | "short_break" => Ok(TimerMode::ShortBreak),
            "long" | "long-break" | "long_break" => Ok(TimerMode::LongBreak),
            other => Err(format!(
                "unknown timer mode '{other}' (expected focus, short-break or long-break)"
            )),
        }
    }
}

/// Per-mode durations, resolved from configuration.
///
/// Defaults come from the static mode table; the Settings-style
/// `[timer]` config section can override each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDurations {
    pub focus_secs: u64,
    pub short_break_secs: u64,
    pub long_break_secs: u64,
}

impl ModeDurations {
    pub const fn for_mode(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::ShortBreak => self.short_break_secs,
            TimerMode::LongBreak => self.long_break_secs,
        }
    }

    /// Build from per-mode minutes, rejecting durations under one minute.
    pub fn from_minutes(
        focus_min: u64,
        short_break_min: u64,
        long_break_min: u64,
    ) -> Result<Self, ConfigError> {
        for (key, minutes) in [
            ("timer.focus_minutes", focus_min),
            ("timer.short_break_minutes", short_break_min),
            ("timer.long_break_minutes", long_break_min),
        ] {
            if minutes == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "duration must be at least one minute".to_string(),
                });
            }
        }
        Ok(Self {
            focus_secs: focus_min.saturating_mul(60),
            short_break_secs: short_break_min.saturating_mul(60),
            long_break_secs: long_break_min.saturating_mul(60),
        })
    }
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self {
            focus_secs: TimerMode::Focus.default_duration_secs(),
            short_break_secs: TimerMode::ShortBreak.default_duration_secs(),
            long_break_secs: TimerMode::LongBreak.default_duration_secs(),
        }
    }
}
