// src/extractors/patients.rs

// --- Imports ---
use super::section::floor_char_boundary;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// --- Constants ---
// Cohort sizes are stated in the abstract, so only the head of the
// document is searched.
const SEARCH_WINDOW: usize = 2000;

// --- Regex Pattern (Lazy Static) ---
// A number followed shortly by a cohort word, with 50 chars of leading and
// 30 chars of trailing context kept for the annotation. `[^\d%]{0,50}`
// keeps percentages and unrelated numbers out of the gap.
static PATIENT_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(.{50})(\d[\d,]*)([^\d%]{0,50}(?:patients|cases|subjects|individuals))(.{30})")
        .expect("Failed to compile PATIENT_COUNT_RE")
});

/// Extracts the reported cohort size from the head of a document.
///
/// Among all candidate matches the numerically largest count wins (a paper
/// mentioning "45 patients" and "12 subjects" reports 45). Returns the count
/// and a two-line annotation of the number with its surrounding context, or
/// `(0, "")` when nothing matches.
pub fn extract_patient_count(text: &str) -> (u64, String) {
    let head = &text[..floor_char_boundary(text, SEARCH_WINDOW)];

    let mut best: Option<(u64, Captures<'_>)> = None;
    for caps in PATIENT_COUNT_RE.captures_iter(head) {
        let count = parse_count(&caps[2]);
        // Strictly greater: on a tie the earliest candidate is kept.
        if best.as_ref().map_or(true, |(max, _)| count > *max) {
            best = Some((count, caps));
        }
    }

    match best {
        Some((count, caps)) => {
            let annotation = format!(
                "{}\n({}{}{}{})",
                &caps[2], &caps[1], &caps[2], &caps[3], &caps[4]
            );
            (count, annotation)
        }
        None => (0, String::new()),
    }
}

fn parse_count(raw: &str) -> u64 {
    raw.replace(',', "").parse().unwrap_or(0)
}
