//! The search command: enumerate commits, match, report.

use crate::cli::{Cli, MatchMode};
use crate::config::Config;
use crate::error::{Result, SiftError};
use crate::git;
use crate::history::{self, Commit};
use crate::report::Reporter;
use crate::scan::{FileEntry, scan_diff};
use chrono::Local;
use globset::{Glob, GlobMatcher};
use log::debug;
use regex::{Regex, RegexBuilder};
use std::env;
use std::path::{Path, PathBuf};

/// Entry point for the search.
pub fn cmd_search(cli: Cli) -> Result<()> {
    // Compile the pattern first so a bad regex fails before any git work.
    let pattern = compile_pattern(&cli.regex, cli.mode)?;
    let path_filter = cli.path.as_deref().map(compile_path_filter).transpose()?;

    let cwd = env::current_dir().map_err(|e| {
        SiftError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let repo_root = git::get_repo_root(&cwd)?;

    if !git::branch_exists(&repo_root, &cli.branch)? {
        return Err(SiftError::UserError(format!(
            "branch '{}' does not exist in this repository",
            cli.branch
        )));
    }

    let config = Config::load_or_default(&repo_root)?;
    let report_name = cli
        .report_name
        .clone()
        .unwrap_or_else(|| config.report_name.clone());
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let until = cli
        .until
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    let commits = history::list_commits(&repo_root, &cli.branch, &cli.since, &until)?;
    if commits.is_empty() {
        println!(
            "No commits found on branch '{}' in the given time window.",
            cli.branch
        );
        return Ok(());
    }
    debug!("{} commits in window", commits.len());

    let mut reporter = Reporter::new(report_name);
    let matched = collect_matches(
        &repo_root,
        &commits,
        cli.mode,
        &pattern,
        path_filter.as_ref(),
        &mut reporter,
    )?;

    if matched == 0 {
        println!("Branch '{}': no matches for the given pattern.", cli.branch);
        return Ok(());
    }

    println!("{}", reporter.render());

    let report_path = reporter.write_to(&output_dir)?;
    println!("Branch '{}': {} matching commit(s).", cli.branch, matched);
    println!("Report written to {}", report_path.display());

    Ok(())
}

/// Match every commit and record the matching ones, returning how many
/// commits matched.
fn collect_matches(
    repo: &Path,
    commits: &[Commit],
    mode: MatchMode,
    pattern: &Regex,
    path_filter: Option<&GlobMatcher>,
    reporter: &mut Reporter,
) -> Result<usize> {
    let mut matched = 0;

    for commit in commits {
        let hit = match mode {
            MatchMode::Message => record_message_match(reporter, commit, pattern),
            MatchMode::Content => {
                record_content_match(reporter, repo, commit, pattern, path_filter)?
            }
        };
        if hit {
            matched += 1;
        }
    }

    Ok(matched)
}

/// Message mode: one record block per matching commit.
fn record_message_match(reporter: &mut Reporter, commit: &Commit, pattern: &Regex) -> bool {
    if !commit.message_matches(pattern) {
        return false;
    }

    record_commit_header(reporter, commit);
    reporter.add_record("");
    true
}

/// Content mode: scan the commit's diff and record per-file matched lines.
fn record_content_match(
    reporter: &mut Reporter,
    repo: &Path,
    commit: &Commit,
    pattern: &Regex,
    path_filter: Option<&GlobMatcher>,
) -> Result<bool> {
    let diff = history::commit_diff(repo, &commit.id)?;
    let mut entries = scan_diff(&diff, pattern);

    if let Some(filter) = path_filter {
        entries.retain(|entry| filter.is_match(&entry.filename));
    }
    if !entries.iter().any(FileEntry::has_matches) {
        debug!("commit {} has no matching changes", commit.id);
        return Ok(false);
    }

    record_commit_header(reporter, commit);
    for entry in entries.iter().filter(|entry| entry.has_matches()) {
        reporter.add_record(format!("    File: {}", entry.filename));
        for change in &entry.changes {
            let line_no = match change.line_number {
                Some(n) => n.to_string(),
                None => "-".to_string(),
            };
            reporter.add_record(format!(
                "        Line: {}    {}    Content: {}",
                line_no, change.change_type, change.content
            ));
        }
    }
    reporter.add_record("");
    Ok(true)
}

fn record_commit_header(reporter: &mut Reporter, commit: &Commit) {
    reporter.add_record(format!(
        "Commit: {}    Time: {}    Author: {}",
        commit.id,
        commit.local_time(),
        commit.author
    ));
    reporter.add_record(format!("    Message: {}", commit.message));
}

/// Compile the search pattern for the given mode.
///
/// Content matching is case-insensitive; message matching is not.
fn compile_pattern(pattern: &str, mode: MatchMode) -> Result<Regex> {
    let compiled = match mode {
        MatchMode::Content => RegexBuilder::new(pattern).case_insensitive(true).build(),
        MatchMode::Message => Regex::new(pattern),
    };

    compiled.map_err(|e| SiftError::PatternError(format!("'{}' failed to compile: {}", pattern, e)))
}

fn compile_path_filter(glob: &str) -> Result<GlobMatcher> {
    Glob::new(glob)
        .map(|g| g.compile_matcher())
        .map_err(|e| SiftError::UserError(format!("invalid --path glob '{}': {}", glob, e)))
}
