// src/export/mod.rs
pub mod excel;
pub mod html;
pub mod json;

use crate::config::KeywordConfig;
use crate::pipeline::models::ResultSet;
use crate::utils::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

// Appended to a document's name in tabular reports when its area of
// interest was not located.
const UNMATCHED_FLAG: &str = " (*)";

/// Writes the report files for one run.
///
/// Output file names are derived from the input directory name, so runs over
/// different directories don't overwrite each other.
pub struct ExportManager {
    base_dir: PathBuf,
    stem: String,
}

impl ExportManager {
    /// Creates the manager and the output directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_dir: P, pdf_dir: &Path) -> Result<Self, ExportError> {
        let base_path = base_dir.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        let dir_name = pdf_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "documents".to_string());

        Ok(Self {
            base_dir: base_path,
            stem: format!("results_{dir_name}"),
        })
    }

    pub fn write_json(&self, results: &ResultSet) -> Result<PathBuf, ExportError> {
        let path = self.base_dir.join(format!("{}.json", self.stem));
        json::write_json(results, &path)?;
        tracing::info!("Saved JSON report to {}", path.display());
        Ok(path)
    }

    pub fn write_excel(
        &self,
        results: &ResultSet,
        config: &KeywordConfig,
    ) -> Result<PathBuf, ExportError> {
        let path = self.base_dir.join(format!("{}.xlsx", self.stem));
        excel::write_excel(results, config, &path)?;
        tracing::info!("Saved Excel report to {}", path.display());
        Ok(path)
    }

    pub fn write_html(
        &self,
        results: &ResultSet,
        config: &KeywordConfig,
    ) -> Result<PathBuf, ExportError> {
        let path = self.base_dir.join(format!("{}.html", self.stem));
        fs::write(&path, html::render(results, config))?;
        tracing::info!("Saved HTML report to {}", path.display());
        Ok(path)
    }
}

/// Dumps every document's record to the log, one JSON block per document.
pub fn log_results(results: &ResultSet) {
    tracing::info!("Results:");
    for (filename, result) in results.iter() {
        let payload = serde_json::to_string_pretty(result).unwrap_or_default();
        tracing::info!("{}\nDocument: {}\n{}", "-".repeat(100), filename, payload);
    }
}

/// The shared tabular view of a result set: one header row and one row per
/// document, columns aligned with the configured categories. Documents whose
/// area of interest was not located carry the ` (*)` flag on their name.
pub(crate) fn table_rows(
    results: &ResultSet,
    config: &KeywordConfig,
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec![
        "Document".to_string(),
        "#Patients".to_string(),
        "Period Of Study".to_string(),
    ];
    headers.extend(config.iter().map(|category| category.name.clone()));

    let rows = results
        .iter()
        .map(|(filename, result)| {
            let mut row = Vec::with_capacity(headers.len());
            let mut document = filename.clone();
            if !result.area_of_interest_matched {
                document.push_str(UNMATCHED_FLAG);
            }
            row.push(document);
            row.push(result.patients.clone());
            row.push(result.period.clone());
            for (_, matched) in &result.keyword_matches {
                row.push(matched.join(", "));
            }
            row
        })
        .collect();

    (headers, rows)
}

pub(crate) fn is_flagged(row: &[String]) -> bool {
    row.first().map_or(false, |doc| doc.ends_with(UNMATCHED_FLAG))
}
