// src/export/excel.rs
use crate::config::KeywordConfig;
use crate::pipeline::models::ResultSet;
use crate::utils::error::ExportError;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::path::Path;

const COLUMN_WIDTH: f64 = 40.0;

/// Writes the result table as an Excel workbook: bold header row on a silver
/// background, wrapped centered cells, and rows for documents without a
/// located area of interest rendered in red.
pub fn write_excel(
    results: &ResultSet,
    config: &KeywordConfig,
    path: &Path,
) -> Result<(), ExportError> {
    let basic_format = Format::new().set_text_wrap().set_align(FormatAlign::Center);
    let header_format = basic_format
        .clone()
        .set_bold()
        .set_background_color(Color::Silver);
    let warn_format = basic_format.clone().set_font_color(Color::Red);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let (headers, rows) = super::table_rows(results, config);

    for (col, title) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, title.as_str(), &header_format)?;
    }
    for col in 0..headers.len() {
        worksheet.set_column_width(col as u16, COLUMN_WIDTH)?;
    }

    for (row_ix, row) in rows.iter().enumerate() {
        let style = if super::is_flagged(row) {
            &warn_format
        } else {
            &basic_format
        };
        for (col_ix, cell) in row.iter().enumerate() {
            worksheet.write_with_format(row_ix as u32 + 1, col_ix as u16, cell.as_str(), style)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
