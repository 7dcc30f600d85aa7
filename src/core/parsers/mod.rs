//! Table Dialect Parsers
//!
//! One pure function per dialect, each turning text into a [`Grid`]:
//!
//! - `tsv`: tab-separated lines (also the fallback)
//! - `csv`: quoted-field CSV with embedded commas and line breaks
//! - `markdown`: pipe tables, alignment rows dropped
//! - `spaces`: columns aligned with runs of spaces
//! - `boxdraw`: tables framed with Unicode box-drawing characters
//!
//! # Architecture
//!
//! ```text
//! Text -> Format -> parse_grid -> dialect parser -> Grid
//! ```
//!
//! Parsers never fail. Rows are not padded, so a ragged input yields a
//! ragged grid.

mod boxdraw;
mod csv;
mod markdown;
mod spaces;
mod tsv;


// Re-export public API
pub use boxdraw::parse_boxdraw_table;
pub use csv::{parse_csv, parse_csv_line, scan_csv, CsvScan};
pub use markdown::{is_separator_row, parse_markdown_table};
pub use spaces::parse_space_separated;
pub use tsv::parse_tsv;

use crate::core::detect::Format;

/// One row of cells
pub type Row = Vec<String>;

/// Rows of cells in source order
pub type Grid = Vec<Row>;

/// Parse text as the given format
pub fn parse_grid(input: &str, format: Format) -> Grid {
    match format {
        Format::Csv => parse_csv(input.trim()),
        Format::Spaces => parse_space_separated(input),
        Format::Markdown => parse_markdown_table(input),
        Format::BoxDraw => parse_boxdraw_table(input),
        Format::Tsv => parse_tsv(input),
    }
}

/// Split a framed line on its bar characters.
///
/// Every piece is trimmed. A leading and a trailing empty piece come from
/// the outer frame and are dropped; interior empty pieces are real cells.
pub(crate) fn split_framed(line: &str, is_bar: impl Fn(char) -> bool) -> Row {
    let mut cells: Row = line
        .split(|c: char| is_bar(c))
        .map(|cell| cell.trim().to_string())
        .collect();

    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    cells
}
