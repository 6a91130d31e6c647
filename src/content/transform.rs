//! Body text transforms applied before rendering

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // A top-level heading line: one `#`, one space, text to end of line.
    // `.+` stops before the newline; the optional group swallows it so the
    // line disappears entirely.
    static ref FIRST_H1: Regex = Regex::new(r"(?m)^# .+(\r?\n)?").unwrap();
}

/// Remove the first top-level heading from a markdown body.
///
/// Posts repeat their title as an opening `# Title` line; the title is
/// rendered separately, so that line is redundant. The scan is not anchored
/// to the first line and removes at most one occurrence. Input without such
/// a line comes back unchanged.
pub fn remove_first_h1(markdown: &str) -> Cow<'_, str> {
    FIRST_H1.replace(markdown, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_only_the_first_match() {
        assert_eq!(
            remove_first_h1("# Title\nBody\n# Another"),
            "Body\n# Another"
        );
    }

    #[test]
    fn test_no_heading_returns_input_unchanged() {
        assert_eq!(remove_first_h1("No heading here"), "No heading here");
    }

    #[test]
    fn test_heading_does_not_have_to_be_first_line() {
        assert_eq!(
            remove_first_h1("intro paragraph\n\n# Title\n\nBody"),
            "intro paragraph\n\n\nBody"
        );
    }

    #[test]
    fn test_deeper_headings_are_not_stripped() {
        assert_eq!(
            remove_first_h1("## Section\ntext\n# Real Title\nmore"),
            "## Section\ntext\nmore"
        );
    }

    #[test]
    fn test_crlf_line_is_removed_whole() {
        assert_eq!(remove_first_h1("# Title\r\nBody"), "Body");
    }
}
