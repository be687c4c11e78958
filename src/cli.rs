//! CLI argument parsing for git-sift.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! search implementation lives in the `commands` module.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Git-sift: search a branch's commit history for content matching a regex.
///
/// Commits are enumerated with `git log` within a time window, then either
/// each commit's diff (added and removed lines) or its message is tested
/// against the pattern. Matched commits are echoed and written to a plain
/// text report.
#[derive(Parser, Debug)]
#[command(name = "git-sift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  git-sift --since 2025-01-01 --until 2025-03-27 --branch main --regex 'console\\.log'
  git-sift --since '1 week ago' --branch develop --regex 'JIRA-\\d+' --mode message")]
pub struct Cli {
    /// Start of the time window (e.g. "2025-01-01" or "1 week ago").
    #[arg(long, value_parser = normalize_date)]
    pub since: String,

    /// End of the time window. Defaults to now.
    #[arg(long, value_parser = normalize_date)]
    pub until: Option<String>,

    /// Branch whose history is searched.
    #[arg(long)]
    pub branch: String,

    /// Regular expression to match (case-insensitive in content mode).
    #[arg(long)]
    pub regex: String,

    /// What the pattern is tested against.
    #[arg(long, value_enum, default_value_t = MatchMode::Content)]
    pub mode: MatchMode,

    /// Glob limiting content-mode matches to certain file paths.
    #[arg(long)]
    pub path: Option<String>,

    /// File stem of the report (overrides the config file).
    #[arg(long)]
    pub report_name: Option<String>,

    /// Directory the report is written to (overrides the config file).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug output.
    #[arg(long)]
    pub debug: bool,
}

/// What part of a commit the pattern is tested against.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Added and removed lines in the commit's diff.
    Content,
    /// The commit message text.
    Message,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Normalize a date argument for `git log`.
///
/// Recognized ISO dates and date-times are reformatted to
/// `YYYY-MM-DD HH:MM:SS`; anything else is passed through untouched so
/// git's own date parser can handle relative forms like "1 week ago".
fn normalize_date(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("date must not be empty".to_string());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN);
        return Ok(midnight.format("%Y-%m-%d %H:%M:%S").to_string());
    }

    Ok(value.to_string())
}
