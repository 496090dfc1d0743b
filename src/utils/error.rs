// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read keyword file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Keyword file is not a valid JSON object: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Keyword '{keyword}' does not compile to a search pattern: {source}")]
    Pattern {
        keyword: String,
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction failed for '{path}': {source}")]
    Extraction {
        path: String,
        source: pdf_extract::OutputError,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize results: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError), // Automatically convert configuration errors

    #[error("PDF processing failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
