//! Exit code constants for the git-sift CLI.
//!
//! - 0: Success (including "no matches found")
//! - 1: User error (bad args, unknown branch, not a repository)
//! - 2: Invalid regular expression
//! - 3: Git operation failure
//! - 4: Report write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown branch, or not inside a repository.
pub const USER_ERROR: i32 = 1;

/// The search pattern did not compile.
pub const PATTERN_ERROR: i32 = 2;

/// Git operation failure: log, show, or branch lookup errors.
pub const GIT_FAILURE: i32 = 3;

/// The report file could not be written.
pub const REPORT_FAILURE: i32 = 4;
