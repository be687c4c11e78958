//! Optional defaults file for git-sift.
//!
//! A `.gitsift.yaml` at the repo root supplies defaults for values the CLI
//! can override. Unknown fields are ignored so older binaries keep working
//! with newer config files.

use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up at the repo root.
pub const CONFIG_FILE: &str = ".gitsift.yaml";

/// Defaults for report placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File stem of the report (written as `<report_name>.txt`).
    pub report_name: String,

    /// Directory the report is written to.
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_name: "matches".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Load config from the repo root, falling back to defaults when no
    /// config file exists.
    pub fn load_or_default(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            SiftError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string. Unknown fields are silently ignored
    /// for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SiftError::UserError(format!("failed to parse {}: {}", CONFIG_FILE, e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce an unusable report path.
    pub fn validate(&self) -> Result<()> {
        if self.report_name.is_empty() {
            return Err(SiftError::UserError(
                "config validation failed: report_name must not be empty".to_string(),
            ));
        }
        if self.report_name.contains('/') || self.report_name.contains('\\') {
            return Err(SiftError::UserError(format!(
                "config validation failed: report_name must be a bare file stem (found '{}')",
                self.report_name
            )));
        }
        Ok(())
    }
}
