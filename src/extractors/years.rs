// src/extractors/years.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Pattern (Lazy Static) ---
// Two 4-digit years (19xx/20xx) separated by a short run of arbitrary text,
// with context on both sides kept for the annotation.
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.{0,20})((?:19|20)\d{2})(.{0,25})((?:19|20)\d{2})(.{0,20})")
        .expect("Failed to compile YEAR_RANGE_RE")
});

/// Extracts the study period as a pair of years.
///
/// `primary` is searched first and `fallback` only when the primary window
/// has no match. The first match in scan order wins, even if a later pair
/// would be wider. Returns the year pair and the matched text as found, or
/// `((0, 0), "")` when neither window contains a pair.
pub fn extract_year_range(primary: &str, fallback: Option<&str>) -> ((u16, u16), String) {
    let caps = YEAR_RANGE_RE
        .captures(primary)
        .or_else(|| fallback.and_then(|text| YEAR_RANGE_RE.captures(text)));

    match caps {
        Some(caps) => {
            let start = parse_year(&caps[2]);
            let end = parse_year(&caps[4]);
            ((start, end), caps[0].to_string())
        }
        None => ((0, 0), String::new()),
    }
}

fn parse_year(raw: &str) -> u16 {
    raw.parse().unwrap_or(0)
}
