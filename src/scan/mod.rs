//! Diff scanning: the matching core of git-sift.
//!
//! One commit's `git show` output is scanned line by line. `diff --git`
//! markers open per-file entries, hunk headers reset the line counters, and
//! every added or removed line is tested against the search pattern.
//!
//! The scan is pure: raw diff text in, ordered match records out. Malformed
//! input is never fatal; unparsable markers are skipped and the result is
//! best-effort.

mod cursor;
mod parser;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::scan_diff;
pub use types::{ChangeType, FileEntry, LineMatch};
