//! Error types for the broom CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for broom operations.
///
/// Each variant maps to a specific exit code. Configuration errors are raised
/// before any filesystem access; per-entry I/O failures during a walk never
/// surface here (they go to the [`Sink`](crate::sink::Sink) and the walk
/// continues).
#[derive(Error, Debug)]
pub enum BroomError {
    /// Invalid or missing policy/config field. Fatal, raised before any
    /// filesystem access.
    #[error("{0}")]
    ConfigError(String),

    /// I/O failure during setup (e.g. unreadable config or request file).
    #[error("{0}")]
    IoError(String),
}

impl BroomError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BroomError::ConfigError(_) => exit_codes::USER_ERROR,
            BroomError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for broom operations.
pub type Result<T> = std::result::Result<T, BroomError>;
