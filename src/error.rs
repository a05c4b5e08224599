//! Error types for the senv CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for senv operations.
///
/// Each variant maps to a fixed exit code. A child that exits non-zero is not
/// an error: its code travels back in the execution result instead.
#[derive(Error, Debug)]
pub enum SenvError {
    /// User provided invalid options.
    #[error("{0}")]
    UserError(String),

    /// No target command was given to `senv env`.
    #[error("no command to run: {0}")]
    InvalidInvocation(String),

    /// Properties could not be fetched from the config server or processed.
    #[error("config fetch failed: {0}")]
    ConfigFetch(String),

    /// The target command could not be started.
    #[error("failed to launch '{program}': {reason}")]
    LaunchFailure { program: String, reason: String },
}

impl SenvError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SenvError::UserError(_) => exit_codes::USER_ERROR,
            SenvError::InvalidInvocation(_) => exit_codes::USER_ERROR,
            SenvError::ConfigFetch(_) => exit_codes::FETCH_FAILURE,
            SenvError::LaunchFailure { .. } => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for senv operations.
pub type Result<T> = std::result::Result<T, SenvError>;
