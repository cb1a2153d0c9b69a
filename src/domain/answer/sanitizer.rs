//! Answer text sanitization.
//!
//! The upstream embeds citation markers of the form `##12$$` into generated
//! text and occasionally pads it with runaway whitespace where citations were
//! removed server-side. This module strips both before any answer leaves the
//! extraction layer.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches "two hash marks, one or more digits, two dollar signs".
static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"##\d+\$\$").expect("valid citation marker regex"));

// Runs of two or more horizontal whitespace characters. Newlines are kept.
static HORIZONTAL_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid whitespace regex"));

// Horizontal whitespace immediately following a newline.
static LINE_LEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]+").expect("valid line-leading regex"));

/// Strips citation artifacts and normalizes whitespace.
///
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str) -> String {
    // Removal can splice a new marker together ("##1##2$$$$"), so repeat
    // until none remain.
    let mut without_artifacts = text.to_string();
    loop {
        let next = CITATION_MARKER.replace_all(&without_artifacts, "");
        if next == without_artifacts {
            break;
        }
        without_artifacts = next.into_owned();
    }
    let collapsed = HORIZONTAL_RUNS.replace_all(&without_artifacts, " ");
    let unindented = LINE_LEADING.replace_all(&collapsed, "\n");
    unindented.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_citation_markers() {
        assert_eq!(
            sanitize("Energy access matters ##12$$ for everyone ##3$$."),
            "Energy access matters for everyone ."
        );
    }

    #[test]
    fn strips_adjacent_markers_without_residue() {
        assert_eq!(sanitize("##1$$##22$$##333$$"), "");
    }

    #[test]
    fn leaves_partial_markers_alone() {
        assert_eq!(sanitize("##x$$ and ##12$ and #1$$"), "##x$$ and ##12$ and #1$$");
    }

    #[test]
    fn collapses_horizontal_runs_but_keeps_newlines() {
        assert_eq!(sanitize("a  \t b\nc"), "a b\nc");
    }

    #[test]
    fn removes_indentation_after_newlines() {
        assert_eq!(sanitize("line one\n   line two\n\tline three"), "line one\nline two\nline three");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  hello  "), "hello");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n  "), "");
    }

    #[test]
    fn marker_removal_does_not_leave_double_spaces() {
        assert_eq!(sanitize("left ##7$$ right"), "left right");
    }

    #[test]
    fn spliced_markers_are_removed_to_fixpoint() {
        // Removing the inner marker reassembles an outer one.
        assert_eq!(sanitize("##1##2$$$$"), "");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in ".{0,200}") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_never_leaves_a_marker(input in "[a-z #$0-9\n\t]{0,120}") {
            let cleaned = sanitize(&input);
            prop_assert!(!super::CITATION_MARKER.is_match(&cleaned));
        }
    }
}
