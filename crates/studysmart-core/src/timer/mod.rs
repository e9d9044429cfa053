mod display;
mod engine;
mod mode;

pub use display::format_mm_ss;
pub use engine::{TimerEngine, FOCUS_CYCLES_PER_LONG_BREAK};
pub use mode::{ModeDurations, ModeProfile, TimerMode};
