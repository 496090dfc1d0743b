// src/pdf/mod.rs
use crate::utils::error::PdfError;
use std::path::{Path, PathBuf};

/// Lists the PDF documents in `dir`, non-recursively, in filesystem
/// discovery order. The result order is the order documents are processed
/// and reported in; it is deliberately not sorted.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, PdfError> {
    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            documents.push(path);
        }
    }

    tracing::debug!("Discovered {} PDF documents in {}", documents.len(), dir.display());
    Ok(documents)
}

/// Converts one PDF to plain text. Corrupt or encrypted documents surface
/// as an error here, which aborts the whole run.
pub fn convert_pdf_to_text(path: &Path) -> Result<String, PdfError> {
    pdf_extract::extract_text(path).map_err(|source| PdfError::Extraction {
        path: path.display().to_string(),
        source,
    })
}

/// Collapses the extracted text into the single flat string all heuristics
/// operate on. Line structure carries no meaning after PDF extraction, so
/// newlines and carriage returns are dropped outright.
pub fn flatten(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}
