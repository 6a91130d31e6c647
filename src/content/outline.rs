//! Table-of-contents extraction

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref HEADING_LINE: Regex = Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)").unwrap();
}

/// One entry of a document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Synthetic anchor id, `heading-{ordinal}` in document order
    pub id: String,

    /// Heading text with markers and surrounding whitespace stripped
    pub title: String,

    /// Nesting level, 1-6
    pub level: u8,
}

/// Scan a markdown body for heading lines and build an ordered outline.
///
/// Pure function of the input text: identical bodies yield identical
/// outlines. Ordinals count from zero in document order, so the body passed
/// in must already have its redundant first H1 stripped.
///
/// The scan is line-based and does not track code fences: a `# `-led line
/// inside a fenced block is still collected. Renderer anchor ids are
/// assigned by the same ordinal scheme, so the two stay in step for
/// fence-free documents.
pub fn build_outline(markdown: &str) -> Vec<TocEntry> {
    HEADING_LINE
        .captures_iter(markdown)
        .enumerate()
        .map(|(index, cap)| TocEntry {
            id: format!("heading-{}", index),
            title: cap[2].trim().to_string(),
            level: cap[1].len() as u8,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, level: u8) -> TocEntry {
        TocEntry {
            id: id.to_string(),
            title: title.to_string(),
            level,
        }
    }

    #[test]
    fn test_outline_orders_and_levels() {
        let outline = build_outline("## A\ntext\n### B\n# C");
        assert_eq!(
            outline,
            vec![
                entry("heading-0", "A", 2),
                entry("heading-1", "B", 3),
                entry("heading-2", "C", 1),
            ]
        );
    }

    #[test]
    fn test_outline_is_idempotent() {
        let body = "# One\n\nsome text\n\n###### Six\n";
        assert_eq!(build_outline(body), build_outline(body));
    }

    #[test]
    fn test_no_headings_yields_empty_outline() {
        assert!(build_outline("just a paragraph\nand another").is_empty());
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        assert!(build_outline("####### too deep").is_empty());
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        assert!(build_outline("#hashtag").is_empty());
    }

    #[test]
    fn test_title_whitespace_is_trimmed() {
        let outline = build_outline("##   padded title   ");
        assert_eq!(outline, vec![entry("heading-0", "padded title", 2)]);
    }

    // Line-based scan, fences are not parsed: a `#` comment inside a fenced
    // block is picked up as a heading.
    #[test]
    fn test_heading_inside_code_fence_is_still_matched() {
        let body = "## Real\n\n```sh\n# a shell comment\n```\n";
        let outline = build_outline(body);
        assert_eq!(
            outline,
            vec![
                entry("heading-0", "Real", 2),
                entry("heading-1", "a shell comment", 1),
            ]
        );
    }
}
