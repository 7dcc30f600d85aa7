//! HTML table rendering
//!
//! Produces a compact `<table>` fragment with no whitespace between tags,
//! so spreadsheets and rich-text editors paste it as a clean grid.

use crate::core::detect::Delimiter;
use crate::core::parsers::{parse_grid, Grid};

/// Escape the characters that are significant in HTML text and attributes.
///
/// `&` is replaced first so the entities introduced afterwards are not
/// escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape a cell and turn its line breaks into `<br>`
fn render_cell_text(cell: &str) -> String {
    escape_html(cell).replace('\n', "<br>")
}

/// Render a grid as an HTML table fragment.
///
/// When `has_header` is set, cells of the first row become `<th>`;
/// everything else is `<td>`.
pub fn render_grid(rows: &Grid, has_header: bool) -> String {
    let mut html = String::from("<table>");

    for (index, cells) in rows.iter().enumerate() {
        let tag = if has_header && index == 0 { "th" } else { "td" };

        html.push_str("<tr>");
        for cell in cells {
            html.push('<');
            html.push_str(tag);
            html.push('>');
            html.push_str(&render_cell_text(cell));
            html.push_str("</");
            html.push_str(tag);
            html.push('>');
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

/// Parse text in the requested format and render it as an HTML table.
///
/// `Delimiter::Auto` runs format detection first.
pub fn to_html_table(data: &str, has_header: bool, delimiter: Delimiter) -> String {
    let format = delimiter.resolve(data);
    render_grid(&parse_grid(data, format), has_header)
}

/// Render tab-separated text as an HTML table
pub fn tsv_to_html_table(tsv: &str, has_header: bool) -> String {
    to_html_table(tsv, has_header, Delimiter::TSV)
}

/// Wrap a fragment in a minimal UTF-8 HTML document
pub fn wrap_html_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>{}</body></html>",
        fragment
    )
}
