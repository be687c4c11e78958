//! Command implementation for git-sift.
//!
//! The CLI has a single operation: search a branch's history. This module
//! wires argument parsing, config, the git collaborators, the diff scanner,
//! and the reporter together.

mod search;

use crate::cli::Cli;
use crate::error::Result;

/// Run the search described by the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    search::cmd_search(cli)
}
