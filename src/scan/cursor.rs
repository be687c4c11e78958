//! Line-counter state and marker parsing for the diff scan.

/// Running line counters for one file section.
///
/// The add-side counter numbers lines present in the post-image, the
/// remove-side counter lines present in the pre-image. Both are inactive
/// (None) until a hunk header is seen, both reset on every hunk header, and
/// both only ever advance between resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct LineCursor {
    pub add_line: Option<usize>,
    pub remove_line: Option<usize>,
}

impl LineCursor {
    /// Deactivate both counters (new file section, no hunk seen yet).
    pub fn clear(&mut self) {
        self.add_line = None;
        self.remove_line = None;
    }

    /// Reset both counters at a hunk boundary.
    ///
    /// Both sides are seeded from the pre-image start number. For the add
    /// side this is an approximation (post-image numbering would come from
    /// the `+` half of the header); the established numbering is kept as-is
    /// because report consumers rely on it.
    pub fn reset(&mut self, old_start: usize) {
        self.add_line = Some(old_start);
        self.remove_line = Some(old_start);
    }

    /// Advance the counters after a content line has been examined.
    ///
    /// A `-` line leaves the add side alone, a `+` line leaves the remove
    /// side alone, and context lines advance both.
    pub fn advance(&mut self, line: &str) {
        if !line.starts_with('-')
            && let Some(n) = self.add_line.as_mut()
        {
            *n += 1;
        }
        if !line.starts_with('+')
            && let Some(n) = self.remove_line.as_mut()
        {
            *n += 1;
        }
    }
}

/// Parse the old-file start number from a hunk header.
///
/// Header shape: `@@ -<oldStart>[,<oldCount>] +<newStart>[,<newCount>] @@`,
/// optionally followed by section context. Returns None when the line is not
/// a parsable hunk header.
pub(super) fn parse_hunk_header(line: &str) -> Option<usize> {
    let rest = line.strip_prefix("@@ ")?;
    let end = rest.find(" @@")?;
    let range = &rest[..end];

    let old_part = range.split_whitespace().next()?.strip_prefix('-')?;
    let start = match old_part.find(',') {
        Some(comma) => &old_part[..comma],
        None => old_part,
    };

    start.parse().ok()
}

/// Extract the post-image path from a `diff --git a/<path> b/<path>` line.
///
/// Paths may contain spaces, so the last ` b/` occurrence is taken as the
/// separator. Returns None when no ` b/` half is present.
pub(super) fn parse_target_path(line: &str) -> Option<String> {
    let rest = line.strip_prefix("diff --git ")?;
    let b_pos = rest.rfind(" b/")?;
    Some(rest[b_pos + 3..].to_string())
}
