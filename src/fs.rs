//! Filesystem helpers for git-sift.
//!
//! Report files are written atomically: content goes to a temporary file in
//! the target directory which is then renamed over the destination, so an
//! interrupted run never leaves a half-written report behind.

use crate::error::{Result, SiftError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SiftError::ReportError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SiftError::ReportError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    Ok(())
}

/// Temporary file path in the same directory as the target, so the final
/// rename stays on one filesystem.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SiftError::ReportError("invalid report path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SiftError::ReportError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(path);
        SiftError::ReportError(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SiftError::ReportError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}
