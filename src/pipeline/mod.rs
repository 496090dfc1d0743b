// src/pipeline/mod.rs
pub mod models;

use crate::config::KeywordConfig;
use crate::extractors::section::floor_char_boundary;
use crate::extractors::{patients, section, years, KeywordMatcher};
use crate::pdf;
use crate::utils::error::ConfigError;
use crate::utils::AppError;
use models::{ExtractionResult, ResultSet};
use std::path::Path;

// --- Constants ---
// The study period is usually stated close to the methods heading; this is
// the window searched before falling back to the document head.
const YEAR_WINDOW: usize = 1000;
const HEAD_WINDOW: usize = 2000;
const PROGRESS_WIDTH: usize = 110;

/// Runs the full extraction over a directory of documents.
///
/// Each document is a pure function of its own text plus the shared
/// immutable keyword configuration; documents are processed sequentially in
/// discovery order and a conversion failure aborts the whole run.
pub struct ResultAggregator {
    matcher: KeywordMatcher,
}

impl ResultAggregator {
    pub fn new(config: &KeywordConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            matcher: KeywordMatcher::new(config)?,
        })
    }

    pub fn run(&self, pdf_dir: &Path) -> Result<ResultSet, AppError> {
        let documents = pdf::discover_documents(pdf_dir)?;
        if documents.is_empty() {
            tracing::warn!("No PDF documents found in {}", pdf_dir.display());
        }

        let mut results = ResultSet::default();
        for path in &documents {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let raw = pdf::convert_pdf_to_text(path)?;
            let text = pdf::flatten(&raw);
            tracing::debug!("Flattened {} into {} chars", filename, text.len());

            results.insert(filename.clone(), self.process_document(&text));
            log_processing_done(&filename);
        }

        Ok(results)
    }

    /// The per-document pipeline: locate the area of interest, then run the
    /// fact extractors against their respective windows.
    pub(crate) fn process_document(&self, text: &str) -> ExtractionResult {
        let section = section::locate(text);

        let window_start = floor_char_boundary(text, section.range.0);
        let window_end =
            floor_char_boundary(text, section.range.0.saturating_add(YEAR_WINDOW));
        let year_window = &text[window_start..window_end];
        let head = &text[..floor_char_boundary(text, HEAD_WINDOW)];

        let (_, patients) = patients::extract_patient_count(text);
        let (year_range, period) = years::extract_year_range(year_window, Some(head));
        let keyword_matches = self.matcher.matches(text, &section.substring);

        ExtractionResult {
            patients,
            year_range,
            period,
            keyword_matches,
            area_of_interest_matched: section.matched,
        }
    }
}

// One line per processed document, padded so the Done markers line up.
fn log_processing_done(filename: &str) {
    let mut line = format!("{filename} ");
    while line.len() < PROGRESS_WIDTH {
        line.push('.');
    }
    tracing::info!("{line} Done.");
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordCategory;

    fn aggregator(categories: Vec<(&str, Vec<&str>)>) -> ResultAggregator {
        let categories = categories
            .into_iter()
            .map(|(name, keywords)| KeywordCategory {
                name: name.to_string(),
                keywords: keywords.into_iter().map(str::to_string).collect(),
            })
            .collect();
        ResultAggregator::new(&KeywordConfig::new(categories)).unwrap()
    }

    #[test]
    fn test_end_to_end_document() {
        let text = "...Introduction1 Background text Methods2 Patients enrolled: \
                    120 cases. Study period 1990-2005. Discussion3 ...";
        let result = aggregator(vec![("Country", vec!["Chad"])]).process_document(text);

        assert!(result.patients.contains("120"));
        assert_eq!(result.year_range, (1990, 2005));
        assert!(result.period.contains("1990-2005"));
        assert!(result.area_of_interest_matched);
        assert_eq!(
            result.keyword_matches,
            vec![("Country".to_string(), vec![])]
        );
    }

    #[test]
    fn test_processing_is_deterministic() {
        let text = "...Introduction1 Background text Methods2 Patients enrolled: \
                    120 cases. Study period 1990-2005. Discussion3 ...";
        let agg = aggregator(vec![("Country", vec!["Chad"]), ("Drug", vec!["aspirin"])]);

        assert_eq!(agg.process_document(text), agg.process_document(text));
    }

    #[test]
    fn test_unmatched_document_degrades_to_sentinels() {
        let result = aggregator(vec![("Drug", vec!["aspirin"])])
            .process_document("a short note with none of the expected headings");

        assert!(!result.area_of_interest_matched);
        assert_eq!(result.patients, "");
        assert_eq!(result.year_range, (0, 0));
        assert_eq!(result.period, "");
        assert_eq!(result.keyword_matches, vec![("Drug".to_string(), vec![])]);
    }

    #[test]
    fn test_year_window_fallback_to_document_head() {
        // The year pair sits in the head, before the section start, so only
        // the fallback window can find it.
        let filler = "x".repeat(400);
        let text = format!(
            "abstract period 1991 to 1994 covered. {filler}Methods2 Cohort of adults. \
             {}Discussion3 Closing.{filler}",
            "y".repeat(1100),
        );
        let result = aggregator(vec![]).process_document(&text);

        assert_eq!(result.year_range, (1991, 1994));
    }
}
