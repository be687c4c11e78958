//! Tests for diff scanning.

use regex::{Regex, RegexBuilder};

use super::cursor::{LineCursor, parse_hunk_header, parse_target_path};
use super::types::{ChangeType, FileEntry, LineMatch};
use super::scan_diff;

/// Build a pattern the way content mode does: case-insensitive.
fn pattern(pat: &str) -> Regex {
    RegexBuilder::new(pat)
        .case_insensitive(true)
        .build()
        .unwrap()
}

#[test]
fn test_no_file_markers_yields_empty_list() {
    assert!(scan_diff("", &pattern("x")).is_empty());
    assert!(scan_diff("random text\nmore text\n", &pattern("text")).is_empty());
}

#[test]
fn test_context_line_advances_counter_before_added_match() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                @@ -1,2 +1,3 @@\n \
                unchanged\n\
                +hello world\n\
                -old line\n";

    let result = scan_diff(diff, &pattern("hello"));

    assert_eq!(
        result,
        vec![FileEntry {
            filename: "x.txt".to_string(),
            changes: vec![LineMatch {
                line_number: Some(2),
                content: "hello world".to_string(),
                change_type: ChangeType::Add,
            }],
        }]
    );
}

#[test]
fn test_removed_line_reported_with_remove_side_counter() {
    let diff = "diff --git a/a.rs b/a.rs\n\
                @@ -3,3 +3,2 @@\n \
                context\n\
                -deleted foo\n\
                +added foo\n";

    let result = scan_diff(diff, &pattern("foo"));

    assert_eq!(result.len(), 1);
    let changes = &result[0].changes;
    assert_eq!(changes.len(), 2);

    // The context line advances both sides 3 -> 4. The `-` line is then
    // evaluated at 4 and only advances the remove side; the `+` line is
    // evaluated at the still-unmoved add-side 4.
    assert_eq!(changes[0].change_type, ChangeType::Remove);
    assert_eq!(changes[0].line_number, Some(4));
    assert_eq!(changes[0].content, "deleted foo");
    assert_eq!(changes[1].change_type, ChangeType::Add);
    assert_eq!(changes[1].line_number, Some(4));
    assert_eq!(changes[1].content, "added foo");
}

#[test]
fn test_both_counters_seed_from_old_start() {
    // The add side is deliberately seeded from the pre-image number too,
    // even when the post-image start differs.
    let diff = "diff --git a/x.rs b/x.rs\n\
                @@ -7,3 +20,3 @@\n\
                +foo first\n";

    let result = scan_diff(diff, &pattern("foo"));
    assert_eq!(result[0].changes[0].line_number, Some(7));
}

#[test]
fn test_pattern_is_case_insensitive() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                @@ -1,1 +1,2 @@\n\
                +contains foo here\n";

    let result = scan_diff(diff, &pattern("FOO"));
    assert_eq!(result[0].changes.len(), 1);
}

#[test]
fn test_file_header_lines_are_not_matches() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                --- a/x.txt\n\
                +++ b/x.txt\n\
                @@ -1,1 +1,1 @@\n\
                -old\n\
                +new\n";

    // The pattern would match both `---`/`+++` header lines.
    let result = scan_diff(diff, &pattern(r"x\.txt"));
    assert_eq!(result.len(), 1);
    assert!(result[0].changes.is_empty());
}

#[test]
fn test_match_before_any_hunk_has_no_line_number() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                +stray foo\n";

    let result = scan_diff(diff, &pattern("foo"));
    assert_eq!(
        result[0].changes,
        vec![LineMatch {
            line_number: None,
            content: "stray foo".to_string(),
            change_type: ChangeType::Add,
        }]
    );
}

#[test]
fn test_second_file_section_starts_fresh() {
    let diff = "diff --git a/first.txt b/first.txt\n\
                @@ -10,2 +10,2 @@\n \
                ctx\n\
                +foo in first\n\
                diff --git a/second.txt b/second.txt\n\
                @@ -1,1 +1,2 @@\n\
                +foo in second\n";

    let result = scan_diff(diff, &pattern("foo"));

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].filename, "first.txt");
    assert_eq!(result[0].changes.len(), 1);
    assert_eq!(result[0].changes[0].line_number, Some(11));
    assert_eq!(result[1].filename, "second.txt");
    assert_eq!(result[1].changes.len(), 1);
    assert_eq!(result[1].changes[0].line_number, Some(1));
}

#[test]
fn test_multiple_hunks_reset_counters() {
    let diff = "diff --git a/x.rs b/x.rs\n\
                @@ -2,2 +2,2 @@\n\
                +foo early\n\
                @@ -40,3 +40,3 @@\n \
                ctx\n\
                +foo late\n";

    let result = scan_diff(diff, &pattern("foo"));
    let changes = &result[0].changes;
    assert_eq!(changes[0].line_number, Some(2));
    assert_eq!(changes[1].line_number, Some(41));
}

#[test]
fn test_unparsable_target_path_discards_section() {
    let diff = "diff --git a/a.txt b/a.txt\n\
                @@ -1,1 +1,1 @@\n\
                +foo one\n\
                diff --git broken-marker\n\
                @@ -1,1 +1,1 @@\n\
                +foo two\n\
                diff --git a/c.txt b/c.txt\n\
                @@ -1,1 +1,1 @@\n\
                +foo three\n";

    let result = scan_diff(diff, &pattern("foo"));

    let filenames: Vec<_> = result.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(filenames, vec!["a.txt", "c.txt"]);
    assert_eq!(result[0].changes[0].content, "foo one");
    assert_eq!(result[1].changes[0].content, "foo three");
}

#[test]
fn test_unparsable_hunk_header_is_a_content_line() {
    let diff = "diff --git a/x.rs b/x.rs\n\
                @@ -1,2 +1,2 @@\n \
                a\n\
                @@ not a hunk\n\
                +foo\n";

    // The malformed header advances both counters like any other line.
    let result = scan_diff(diff, &pattern("foo"));
    assert_eq!(result[0].changes[0].line_number, Some(3));
}

#[test]
fn test_commit_preamble_is_ignored() {
    let diff = "commit 0123abcd\n\
                Author: Alice <alice@example.com>\n\
                Date:   Mon Mar 3 10:00:00 2025 +0000\n\
                \n    \
                say hello in the log\n\
                \n\
                diff --git a/x.txt b/x.txt\n\
                @@ -1,1 +1,1 @@\n\
                -nothing\n\
                +nothing else\n";

    let result = scan_diff(diff, &pattern("hello"));
    assert_eq!(result.len(), 1);
    assert!(result[0].changes.is_empty());
}

#[test]
fn test_file_with_no_matches_still_appears() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                @@ -1,1 +1,1 @@\n\
                +unrelated\n";

    let result = scan_diff(diff, &pattern("absent"));
    assert_eq!(result.len(), 1);
    assert!(!result[0].has_matches());
}

#[test]
fn test_scan_is_idempotent() {
    let diff = "diff --git a/x.txt b/x.txt\n\
                @@ -1,2 +1,3 @@\n \
                unchanged\n\
                +hello world\n\
                -old hello\n";

    let pat = pattern("hello");
    assert_eq!(scan_diff(diff, &pat), scan_diff(diff, &pat));
}

#[test]
fn test_file_path_with_spaces() {
    let diff = "diff --git a/src/my file.rs b/src/my file.rs\n\
                @@ -1,1 +1,2 @@\n\
                +foo\n";

    let result = scan_diff(diff, &pattern("foo"));
    assert_eq!(result[0].filename, "src/my file.rs");
}

#[test]
fn test_binary_file_section_produces_no_matches() {
    let diff = "diff --git a/assets/logo.png b/assets/logo.png\n\
                Binary files /dev/null and b/assets/logo.png differ\n";

    let result = scan_diff(diff, &pattern("logo"));
    assert_eq!(result.len(), 1);
    assert!(result[0].changes.is_empty());
}

// ---------------------------------------------------------------------------
// Cursor transitions
// ---------------------------------------------------------------------------

#[test]
fn test_cursor_starts_inactive() {
    let cursor = LineCursor::default();
    assert_eq!(cursor.add_line, None);
    assert_eq!(cursor.remove_line, None);
}

#[test]
fn test_cursor_advance_is_inert_while_inactive() {
    let mut cursor = LineCursor::default();
    cursor.advance(" context");
    cursor.advance("+added");
    assert_eq!(cursor, LineCursor::default());
}

#[test]
fn test_cursor_reset_seeds_both_sides() {
    let mut cursor = LineCursor::default();
    cursor.reset(17);
    assert_eq!(cursor.add_line, Some(17));
    assert_eq!(cursor.remove_line, Some(17));
}

#[test]
fn test_cursor_advance_rules() {
    let mut cursor = LineCursor::default();
    cursor.reset(1);

    cursor.advance(" context");
    assert_eq!((cursor.add_line, cursor.remove_line), (Some(2), Some(2)));

    cursor.advance("+added");
    assert_eq!((cursor.add_line, cursor.remove_line), (Some(3), Some(2)));

    cursor.advance("-removed");
    assert_eq!((cursor.add_line, cursor.remove_line), (Some(3), Some(3)));
}

#[test]
fn test_cursor_clear_deactivates() {
    let mut cursor = LineCursor::default();
    cursor.reset(5);
    cursor.clear();
    assert_eq!(cursor, LineCursor::default());
}

// ---------------------------------------------------------------------------
// Marker parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_hunk_header_formats() {
    // Standard form with lengths
    assert_eq!(parse_hunk_header("@@ -10,5 +10,7 @@"), Some(10));

    // Without lengths (single line change)
    assert_eq!(parse_hunk_header("@@ -1 +1 @@"), Some(1));

    // With section context after the closing @@
    assert_eq!(parse_hunk_header("@@ -10,5 +20,3 @@ fn foo()"), Some(10));

    // New file, no prior content
    assert_eq!(parse_hunk_header("@@ -0,0 +1,10 @@"), Some(0));
}

#[test]
fn test_parse_hunk_header_rejects_non_headers() {
    assert_eq!(parse_hunk_header("@@ not a hunk"), None);
    assert_eq!(parse_hunk_header("@@ +1,2 @@"), None);
    assert_eq!(parse_hunk_header("context @@ -1,2 +1,2 @@"), None);
    assert_eq!(parse_hunk_header(" regular line"), None);
}

#[test]
fn test_parse_target_path_variants() {
    assert_eq!(
        parse_target_path("diff --git a/src/lib.rs b/src/lib.rs"),
        Some("src/lib.rs".to_string())
    );
    // Rename: the post-image side wins.
    assert_eq!(
        parse_target_path("diff --git a/old.rs b/new.rs"),
        Some("new.rs".to_string())
    );
    // Spaces in the path
    assert_eq!(
        parse_target_path("diff --git a/my file.txt b/my file.txt"),
        Some("my file.txt".to_string())
    );
    assert_eq!(parse_target_path("diff --git broken"), None);
    assert_eq!(parse_target_path("not a marker"), None);
}
