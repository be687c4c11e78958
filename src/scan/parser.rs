//! The diff scan loop.

use regex::Regex;

use super::cursor::{LineCursor, parse_hunk_header, parse_target_path};
use super::types::{ChangeType, FileEntry, LineMatch};

/// Scan one commit's diff text for lines matching `pattern`.
///
/// `diff_text` is the full output of a "show this commit's changes"
/// invocation: unified diff format, possibly many file sections with many
/// hunks each. Returns one entry per parsable file section, in input order.
/// Entries with zero matches are kept; callers filter.
///
/// The scan never fails. Unparsable markers are skipped, and lines that
/// cannot be attributed to a file (a section whose target path did not
/// parse, or preamble before the first marker) produce no matches.
pub fn scan_diff(diff_text: &str, pattern: &Regex) -> Vec<FileEntry> {
    let mut entries = Vec::new();
    let mut current: Option<FileEntry> = None;
    let mut cursor = LineCursor::default();

    for line in diff_text.lines() {
        if line.starts_with("diff --git ") {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = parse_target_path(line).map(FileEntry::new);
            cursor.clear();
            continue;
        }

        if let Some(old_start) = parse_hunk_header(line) {
            cursor.reset(old_start);
            continue;
        }

        if let Some(entry) = current.as_mut() {
            if let Some(content) = line.strip_prefix('+') {
                if !line.starts_with("+++") && pattern.is_match(content) {
                    entry.changes.push(LineMatch {
                        line_number: cursor.add_line,
                        content: content.to_string(),
                        change_type: ChangeType::Add,
                    });
                }
            } else if let Some(content) = line.strip_prefix('-') {
                if !line.starts_with("---") && pattern.is_match(content) {
                    entry.changes.push(LineMatch {
                        line_number: cursor.remove_line,
                        content: content.to_string(),
                        change_type: ChangeType::Remove,
                    });
                }
            }
        }

        cursor.advance(line);
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}
