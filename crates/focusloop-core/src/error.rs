//! Core error types for focusloop-core.
//!
//! A thiserror-based hierarchy: `CoreError` at the top, with dedicated
//! enums for configuration, validation, and clock command failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Clock command errors
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Config directory could not be determined or created
    #[error("config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Unknown dot-path key passed to get/set
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration or a value for it
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Clock command errors.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Command issued while no run is active. A reported no-op, never a crash.
    #[error("clock is not running (start it first)")]
    Inactive,

    /// Interval parameters rejected at start.
    #[error("invalid intervals: {0}")]
    InvalidIntervals(#[from] ValidationError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
