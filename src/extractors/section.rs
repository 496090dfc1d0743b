// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
// Fallback boundaries when a heading pattern is missing. The start sentinel
// skips an assumed 1000-char preamble; the end sentinel keeps an equally
// sized tail (usually references) out of the section.
const NO_START_SENTINEL: usize = 1000;
const NO_END_MARGIN: usize = 1000;

// --- Regex Patterns (Lazy Static) ---
// Headings survive PDF flattening as the heading word glued to a section
// number and the first word of the body, e.g. "Methods2 Patients were...".
// The trailing `[1-9\s]*[A-Z1-9]` captures that artifact.
static SECTION_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:introduction|methods|patients|materials)[1-9\s]*[A-Z1-9]")
        .expect("Failed to compile SECTION_START_RE")
});

static SECTION_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:discussion|references)[1-9\s]*[A-Z1-9]")
        .expect("Failed to compile SECTION_END_RE")
});

// --- Data Structures ---
/// The located area of interest of one document.
///
/// When `matched` is false, the missing boundary in `range` is a sentinel
/// (start = 1000, end = text length - 1000), not a real heading position.
#[derive(Debug, Clone)]
pub struct SectionMatch {
    pub substring: String,
    pub matched: bool,
    pub range: (usize, usize),
}

/// Locates the span between the first introduction/methods/patients/materials
/// heading and the first discussion/references heading.
///
/// The start boundary is the leftmost match start of the start pattern; the
/// end boundary is the leftmost match end of the end pattern. A reversed span
/// (start >= end) yields an empty substring, which is degraded output, not an
/// error.
pub fn locate(text: &str) -> SectionMatch {
    let start = SECTION_START_RE.find_iter(text).map(|m| m.start()).min();
    let end = SECTION_END_RE.find_iter(text).map(|m| m.end()).min();
    let matched = start.is_some() && end.is_some();

    let start = start.unwrap_or(NO_START_SENTINEL);
    let end = end.unwrap_or_else(|| text.len().saturating_sub(NO_END_MARGIN));

    let substring = if start < end {
        // Sentinel offsets can land inside a multi-byte character.
        &text[floor_char_boundary(text, start)..floor_char_boundary(text, end)]
    } else {
        ""
    };

    SectionMatch {
        substring: substring.to_string(),
        matched,
        range: (start, end),
    }
}

/// Largest char boundary at or below `index`, clamped to the text length.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut boundary = index;
    while !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn filler(len: usize) -> String {
        "lorem ipsum dolor sit amet consectetur adipiscing elit sed do "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    #[test]
    fn test_locate_both_headings() {
        let text = format!(
            "{}Methods2 Patients were enrolled over two decades. {}Discussion3 The cohort was small.{}",
            filler(1200),
            filler(400),
            filler(1200),
        );

        let section = locate(&text);
        assert!(section.matched);
        assert!(section.range.0 < section.range.1);
        assert!(section.substring.starts_with("Methods2 P"));
        assert!(section.substring.contains("enrolled"));
    }

    #[test]
    fn test_start_is_leftmost_heading() {
        let text = format!(
            "{}Introduction1 Early text here. {}Materials3 More text. {}References4 Smith et al.{}",
            filler(100),
            filler(300),
            filler(300),
            filler(1200),
        );

        let section = locate(&text);
        assert!(section.matched);
        // "Introduction1 E" sits at offset 100, ahead of "Materials".
        assert_eq!(section.range.0, 100);
    }

    #[test]
    fn test_end_is_leftmost_match_end() {
        let text = format!(
            "{}Methods2 Cohort described. {}Discussion3 First closing heading. References9 List.{}",
            filler(1100),
            filler(200),
            filler(1100),
        );

        let section = locate(&text);
        assert!(section.matched);
        // Greedy trailing artifact: the match runs through "Discussion3 F".
        let expected_end = 1100 + "Methods2 Cohort described. ".len() + 200 + "Discussion3 F".len();
        assert_eq!(section.range.1, expected_end);
    }

    #[test]
    fn test_no_start_heading_uses_sentinel() {
        let text = format!("{}Discussion3 Closing remarks.{}", filler(2000), filler(1500));

        let section = locate(&text);
        assert!(!section.matched);
        assert_eq!(section.range.0, NO_START_SENTINEL);
    }

    #[test]
    fn test_no_end_heading_uses_length_minus_margin() {
        let text = format!("{}Methods2 Cohort described.{}", filler(500), filler(3000));

        let section = locate(&text);
        assert!(!section.matched);
        assert_eq!(section.range.1, text.len() - NO_END_MARGIN);
        assert!(section.substring.starts_with("Methods2 C"));
    }

    #[test]
    fn test_reversed_span_yields_empty_substring() {
        // End heading early, no start heading: sentinel start 1000 lands past
        // the end boundary.
        let text = format!("Discussion3 Everything up front.{}", filler(600));

        let section = locate(&text);
        assert!(!section.matched);
        assert!(section.range.0 >= section.range.1);
        assert_eq!(section.substring, "");
    }

    #[test]
    fn test_short_text_end_sentinel_saturates() {
        let section = locate("too short either way");
        assert_eq!(section.range, (NO_START_SENTINEL, 0));
        assert_eq!(section.substring, "");
    }

    #[test]
    fn test_floor_char_boundary_multibyte() {
        let text = "aé";
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 50), text.len());
    }
}
