//! Git-sift: search a branch's commit history for content matching a regex.
//!
//! This is the main entry point for the `git-sift` CLI. It parses arguments,
//! initializes debug logging, runs the search, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod history;
pub mod report;
pub mod scan;

#[cfg(test)]
mod test_support;

use cli::Cli;
use log::{LevelFilter, debug};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if cli.debug {
        env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .format_target(false)
            .format_timestamp(None)
            .init();
        debug!("Debug logging enabled");
    }

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
