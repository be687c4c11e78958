//! Error types for the git-sift CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-sift operations.
///
/// Each variant maps to a distinct exit code so callers can tell misuse,
/// a bad pattern, a failing git invocation, and a failed report write apart.
#[derive(Error, Debug)]
pub enum SiftError {
    /// User provided invalid arguments or the repository is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The search pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    PatternError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The report file could not be written.
    #[error("Report write failed: {0}")]
    ReportError(String),
}

impl SiftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SiftError::UserError(_) => exit_codes::USER_ERROR,
            SiftError::PatternError(_) => exit_codes::PATTERN_ERROR,
            SiftError::GitError(_) => exit_codes::GIT_FAILURE,
            SiftError::ReportError(_) => exit_codes::REPORT_FAILURE,
        }
    }
}

/// Result type alias for git-sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
