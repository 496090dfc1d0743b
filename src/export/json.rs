// src/export/json.rs
use crate::pipeline::models::ResultSet;
use crate::utils::error::ExportError;
use std::fs;
use std::path::Path;

/// Writes the full result set as a pretty-printed JSON object keyed by
/// document filename, in discovery order.
pub fn write_json(results: &ResultSet, path: &Path) -> Result<(), ExportError> {
    let payload = serde_json::to_string_pretty(results)?;
    fs::write(path, payload)?;
    Ok(())
}
