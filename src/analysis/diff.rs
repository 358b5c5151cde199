//! Line-level diff rendered with SEARCH/=======/REPLACE conflict markers.

use similar::{ChangeTag, TextDiff};

const SEARCH_MARKER: &str = "<<<<<<< SEARCH\n";
const DIVIDER: &str = "=======\n";
const REPLACE_MARKER: &str = ">>>>>>> REPLACE\n";

/// Diff `original` against `modified` at line granularity and render the
/// result as a single string with conflict markers:
///
/// - a removed run becomes `<<<<<<< SEARCH`, its lines, then `=======`
/// - an added run becomes its lines followed by `>>>>>>> REPLACE`
/// - unchanged runs are emitted verbatim
///
/// Rendering is per-segment and context-free: a trailing removed run with no
/// added run after it leaves the SEARCH/======= block unterminated. Identical
/// inputs reproduce `original` byte-for-byte.
pub fn search_replace_diff(original: &str, modified: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);

    // The differ yields one change per line; collapse consecutive changes
    // with the same tag into maximal segments so a multi-line edit produces
    // a single marker block. Change values keep their trailing newlines.
    let mut segments: Vec<(ChangeTag, String)> = Vec::new();
    for change in diff.iter_all_changes() {
        match segments.last_mut() {
            Some((tag, text)) if *tag == change.tag() => text.push_str(change.value()),
            _ => segments.push((change.tag(), change.value().to_string())),
        }
    }

    let mut out = String::new();
    for (tag, text) in &segments {
        match tag {
            ChangeTag::Delete => {
                out.push_str(SEARCH_MARKER);
                out.push_str(text);
                out.push_str(DIVIDER);
            }
            ChangeTag::Insert => {
                out.push_str(text);
                out.push_str(REPLACE_MARKER);
            }
            ChangeTag::Equal => out.push_str(text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_replacement() {
        let out = search_replace_diff("line1\nline2\n", "line1\nlineX\n");
        assert_eq!(
            out,
            "line1\n<<<<<<< SEARCH\nline2\n=======\nlineX\n>>>>>>> REPLACE\n"
        );
    }

    #[test]
    fn test_identical_input_reproduces_original() {
        assert_eq!(search_replace_diff("abc", "abc"), "abc");

        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(search_replace_diff(text, text), text);
    }

    #[test]
    fn test_pure_addition_has_no_search_block() {
        let out = search_replace_diff("", "new text\n");
        assert_eq!(out, "new text\n>>>>>>> REPLACE\n");
    }

    #[test]
    fn test_trailing_removal_leaves_block_unterminated() {
        let out = search_replace_diff("a\nb\n", "a\n");
        assert_eq!(out, "a\n<<<<<<< SEARCH\nb\n=======\n");
    }

    #[test]
    fn test_multi_line_edit_collapses_into_one_block() {
        let out = search_replace_diff("a\nb\nc\n", "a\nx\ny\nc\n");
        assert_eq!(
            out,
            "a\n<<<<<<< SEARCH\nb\n=======\nx\ny\n>>>>>>> REPLACE\nc\n"
        );
    }

    #[test]
    fn test_consecutive_removed_lines_share_one_search_block() {
        let out = search_replace_diff("a\nb\nc\nd\n", "a\nd\n");
        assert_eq!(out, "a\n<<<<<<< SEARCH\nb\nc\n=======\nd\n");
    }

    #[test]
    fn test_every_marker_pairing_holds() {
        let out = search_replace_diff("one\ntwo\nthree\n", "one\n2\nthree\nfour\n");
        for (i, line) in out.lines().enumerate() {
            if line == "<<<<<<< SEARCH" {
                let rest: Vec<&str> = out.lines().skip(i + 1).collect();
                assert!(
                    rest.contains(&"======="),
                    "SEARCH block missing its divider"
                );
            }
        }
        assert!(out.contains(">>>>>>> REPLACE\n"));
    }
}
