//! Git command runner for git-sift.
//!
//! Thin wrapper around the git executable with captured stdout/stderr and
//! structured error handling. The tool never touches git's object store;
//! every history question goes through a subprocess here.

use crate::error::{Result, SiftError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured output of a successful git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Run a git command with the specified working directory.
///
/// Returns `Ok(GitOutput)` on exit code 0 and `SiftError::GitError` with the
/// command's stderr (or stdout, when stderr is empty) otherwise.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            SiftError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(SiftError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Running outside a repository is reported as a clean user error rather
/// than a git failure, so the exit code distinguishes misuse from a broken
/// git installation.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            SiftError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    if output.status.success() {
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PathBuf::from(root))
    } else {
        Err(SiftError::UserError(
            "not inside a git repository. Run git-sift from within the repository to search."
                .to_string(),
        ))
    }
}

/// Check whether `refs/heads/<branch>` exists in the repository.
///
/// Uses `git show-ref --verify --quiet`, whose non-zero exit is the "no"
/// answer, not a failure.
pub fn branch_exists<P: AsRef<Path>>(repo: P, branch: &str) -> Result<bool> {
    let reference = format!("refs/heads/{}", branch);
    let output = Command::new("git")
        .current_dir(repo.as_ref())
        .args(["show-ref", "--verify", "--quiet", &reference])
        .output()
        .map_err(|e| SiftError::GitError(format!("failed to execute git show-ref: {}", e)))?;

    Ok(output.status.success())
}
