//! Countdown formatting helpers for the presentation layer.

/// Format a second count as `MM:SS`, zero-padded.
pub fn format_mm_ss(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
