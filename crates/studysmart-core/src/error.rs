//! Core error types for studysmart-core.
//!
//! Typed error hierarchy using thiserror, shared between the library and
//! the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studysmart-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for planner operations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was left blank
    #[error("'{field}' must not be blank")]
    BlankField { field: &'static str },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// Index out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

/// Notification delivery errors. Always non-fatal to the caller.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Writing to the output channel failed
    #[error("Failed to deliver notification: {0}")]
    Io(#[from] std::io::Error),

    /// The notification backend is unavailable
    #[error("Notification backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_convert_into_core_error() {
        let err: CoreError = ConfigError::UnknownKey("timer.pace".to_string()).into();
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: timer.pace"
        );

        let err: CoreError = ValidationError::BlankField { field: "title" }.into();
        assert_eq!(err.to_string(), "Validation error: 'title' must not be blank");
    }

    #[test]
    fn notify_errors_wrap_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = NotifyError::from(io);
        assert!(err.to_string().contains("pipe closed"));
    }
}
