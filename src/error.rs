//! Error types for roster
//!
//! Uses `thiserror` for library errors. Each port and use case has its own
//! error enum; `RosterError` covers the crate-level concerns around them
//! (configuration, files, user-supplied values).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    /// Config file exists but cannot be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timestamp argument is not RFC 3339
    #[error("invalid timestamp '{value}': {message} (expected RFC 3339, e.g. 2024-01-01T00:00:00Z)")]
    InvalidTimestamp { value: String, message: String },
}
