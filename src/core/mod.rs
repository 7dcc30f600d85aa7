//! Core conversion modules
//!
//! This module contains the conversion pipeline stages:
//! - `convert`: the end-to-end entry point and its options
//! - `unescape`: literal `\t`/`\n`/`\r` handling
//! - `detect`: table format detection
//! - `parsers`: one parser per table dialect
//! - `render`: HTML table rendering

pub mod convert;
pub mod detect;
pub mod parsers;
pub mod render;
pub mod unescape;

// Re-export main types and functions
pub use convert::{convert, ConvertOptions};
pub use detect::{detect_format, Delimiter, Format};
pub use parsers::{
    parse_boxdraw_table, parse_csv, parse_csv_line, parse_grid, parse_markdown_table,
    parse_space_separated, parse_tsv, scan_csv, CsvScan, Grid, Row,
};
pub use render::{escape_html, render_grid, to_html_table, tsv_to_html_table, wrap_html_document};
pub use unescape::{has_literal_escapes, unescape_literals};
