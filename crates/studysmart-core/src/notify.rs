//! Notification seam for interval completion.
//!
//! Delivery is fire-and-forget: drivers ignore errors so a failed bell or
//! missing backend can never affect timer state.

use crate::error::NotifyError;

/// Consumer of "timer finished" notifications.
///
/// Receives the label of the mode that just ended (for example
/// "Focus Session").
pub trait Notifier {
    fn notify(&self, ended_label: &str) -> Result<(), NotifyError>;
}

/// Notifier that swallows everything. Used when notifications are
/// disabled in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _ended_label: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_notifier_always_succeeds() {
        assert!(NullNotifier.notify("Focus Session").is_ok());
    }
}
