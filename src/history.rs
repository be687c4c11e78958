//! Commit enumeration and diff retrieval.
//!
//! Wraps `git log` and `git show` and parses their text output into commit
//! records. The log format uses `|` separators; a commit subject may itself
//! contain `|`, so only the first three separators split a line.

use crate::error::Result;
use crate::git::run_git;
use chrono::{DateTime, Local};
use log::debug;
use regex::Regex;
use std::path::Path;

const LOG_FORMAT: &str = "%H|%ct|%an|%s";

/// One commit from `git log`, as handed to the matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash.
    pub id: String,
    /// Commit time as unix epoch seconds.
    pub timestamp: i64,
    /// Author name.
    pub author: String,
    /// Subject line of the commit message.
    pub message: String,
}

impl Commit {
    /// Test the commit message against a pattern (case-sensitive).
    pub fn message_matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.message)
    }

    /// Commit time rendered as a local date-time string.
    pub fn local_time(&self) -> String {
        match DateTime::from_timestamp(self.timestamp, 0) {
            Some(utc) => utc
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

/// Enumerate commits on `branch` whose commit time falls inside the window.
///
/// Commits are returned in `git log` order (newest first). An empty window
/// yields an empty vector, not an error.
pub fn list_commits<P: AsRef<Path>>(
    repo: P,
    branch: &str,
    since: &str,
    until: &str,
) -> Result<Vec<Commit>> {
    let since_arg = format!("--since={}", since);
    let until_arg = format!("--until={}", until);
    let format_arg = format!("--pretty=format:{}", LOG_FORMAT);
    debug!("git log {} {} {} {}", branch, since_arg, until_arg, format_arg);

    let output = run_git(repo, &["log", branch, &since_arg, &until_arg, &format_arg])?;
    Ok(parse_log_output(&output.stdout))
}

/// Retrieve one commit's full textual diff via `git show`.
pub fn commit_diff<P: AsRef<Path>>(repo: P, id: &str) -> Result<String> {
    debug!("git show {}", id);
    let output = run_git(repo, &["show", id])?;
    Ok(output.stdout)
}

fn parse_log_output(stdout: &str) -> Vec<Commit> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(parse_log_line)
        .collect()
}

/// Parse one `%H|%ct|%an|%s` line. Lines that don't fit are skipped.
fn parse_log_line(line: &str) -> Option<Commit> {
    let mut parts = line.splitn(4, '|');
    let id = parts.next()?;
    let timestamp = parts.next()?.parse().ok()?;
    let author = parts.next()?;
    let message = parts.next().unwrap_or("");

    Some(Commit {
        id: id.to_string(),
        timestamp,
        author: author.to_string(),
        message: message.to_string(),
    })
}
