// src/export/html.rs
use crate::config::KeywordConfig;
use crate::pipeline::models::ResultSet;
use std::fmt::Write;

const HEADER_COLOR: &str = "grey";
const ROW_EVEN_COLOR: &str = "lightgrey";
const ROW_ODD_COLOR: &str = "white";
const BORDER_COLOR: &str = "darkslategray";

/// Renders the result table as a standalone HTML page: grey header with
/// white text, alternating white/lightgrey rows.
pub fn render(results: &ResultSet, config: &KeywordConfig) -> String {
    let (headers, rows) = super::table_rows(results, config);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Extraction results</title>\n</head>\n<body>\n");
    let _ = writeln!(
        page,
        "<table style=\"border-collapse: collapse; border: 1px solid {BORDER_COLOR};\">"
    );

    page.push_str("<tr>\n");
    for title in &headers {
        let _ = writeln!(
            page,
            "<th style=\"background-color: {HEADER_COLOR}; color: white; \
             border: 1px solid {BORDER_COLOR}; padding: 6px;\"><b>{}</b></th>",
            html_escape::encode_text(title),
        );
    }
    page.push_str("</tr>\n");

    for (row_ix, row) in rows.iter().enumerate() {
        let background = if row_ix % 2 == 0 {
            ROW_ODD_COLOR
        } else {
            ROW_EVEN_COLOR
        };
        page.push_str("<tr>\n");
        for cell in row {
            let _ = writeln!(
                page,
                "<td style=\"background-color: {background}; color: {BORDER_COLOR}; \
                 border: 1px solid {BORDER_COLOR}; padding: 6px;\">{}</td>",
                html_escape::encode_text(cell),
            );
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</table>\n</body>\n</html>\n");
    page
}
