//! Core error types for zeno-core.
//!
//! This module defines the error hierarchy using thiserror. The planning
//! engine itself only fails with [`ScheduleError`]; [`CoreError`] adds the
//! validation layer on top. Configuration has its own [`ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::SchemaError;

/// Core error type for zeno-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Planning errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Request failed schema validation
    #[error("Invalid request: {}", join_schema_errors(.0))]
    ValidationFailed(Vec<SchemaError>),
}

/// Errors raised by the planning engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Two fixed blocks share time. `first` is the earlier block in sorted
    /// order.
    #[error("Fixed blocks overlap: '{first}' and '{second}'")]
    Overlap { first: String, second: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be determined or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

fn join_schema_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<SchemaError>> for CoreError {
    fn from(errors: Vec<SchemaError>) -> Self {
        CoreError::ValidationFailed(errors)
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_wraps_into_core_error() {
        let err: CoreError = ScheduleError::Overlap {
            first: "a".into(),
            second: "b".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Schedule error: Fixed blocks overlap: 'a' and 'b'");
    }

    #[test]
    fn validation_failure_lists_every_field() {
        let err = CoreError::from(vec![
            SchemaError::new("fixed_blocks[0].id", "must not be empty"),
            SchemaError::new("transition_buffer_minutes", "must be at most 120"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid request: fixed_blocks[0].id: must not be empty; \
             transition_buffer_minutes: must be at most 120"
        );
    }
}
