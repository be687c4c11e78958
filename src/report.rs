//! Plain-text report accumulation and writing.
//!
//! The reporter only buffers ordered lines; nothing touches the filesystem
//! until `write_to`. The same lines that reach the report are what the
//! search command echoes to stdout.

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Ordered text lines destined for `<dir>/<name>.txt`.
#[derive(Debug)]
pub struct Reporter {
    name: String,
    records: Vec<String>,
}

impl Reporter {
    /// Create a reporter; `name` becomes the file stem of the report.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Append one line to the report.
    pub fn add_record(&mut self, record: impl Into<String>) {
        self.records.push(record.into());
    }

    /// True if any line has been recorded.
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    /// Join all records with newlines.
    pub fn render(&self) -> String {
        self.records.join("\n")
    }

    /// Write the rendered report to `<dir>/<name>.txt` and return the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.txt", self.name));
        atomic_write_file(&path, &self.render())?;
        Ok(path)
    }
}
