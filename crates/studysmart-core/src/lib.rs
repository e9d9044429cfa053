//! # StudySmart Core Library
//!
//! Core logic for the StudySmart study planner. All operations are
//! available through this library; the CLI binary is a thin presentation
//! layer over it.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven countdown state machine. The caller
//!   owns the clock and invokes `tick()` once per elapsed second.
//! - **Planner**: in-memory stores for tasks, subjects, calendar events
//!   and the mock profile. Domain state is never persisted - every
//!   process starts from the same seeded sample data, like a fresh page
//!   load of the view it models.
//! - **Config**: TOML-based user preferences (interval durations,
//!   notification toggles).
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown and mode-switching state machine
//! - [`Config`]: application configuration management
//! - [`Notifier`]: seam for "timer finished" notifications
//! - [`TaskBoard`], [`SubjectBook`], [`Calendar`], [`Profile`]: planner
//!   stores

pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod profile;
pub mod subject;
pub mod task;
pub mod timer;

pub use calendar::{Calendar, CalendarDay, StudyEvent, WEEK_DAYS};
pub use config::Config;
pub use error::{ConfigError, CoreError, NotifyError, ValidationError};
pub use events::Event;
pub use notify::{Notifier, NullNotifier};
pub use profile::{Course, Profile};
pub use subject::{Subject, SubjectBook, COLOR_PALETTE, UNKNOWN_SUBJECT_COLOR};
pub use task::{Priority, Task, TaskBoard, TaskFilter};
pub use timer::{
    format_mm_ss, ModeDurations, ModeProfile, TimerEngine, TimerMode,
    FOCUS_CYCLES_PER_LONG_BREAK,
};
