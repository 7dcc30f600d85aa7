//! # tabclip
//!
//! Turn tabular text of unknown origin into an HTML table ready for the
//! clipboard.
//!
//! ## Features
//!
//! - **Format Detection**: TSV, CSV, Markdown pipe tables, space-aligned
//!   columns and box-drawing tables are recognized automatically
//! - **Quoted CSV**: embedded commas, doubled quotes and line breaks
//! - **Literal Escapes**: `A\tB\nC` pasted as text is unescaped first
//! - **Compact HTML**: a `<table>` fragment spreadsheets paste cleanly
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### One-shot Conversion
//!
//! ```rust
//! use tabclip::{to_html_table, Delimiter};
//!
//! let html = to_html_table("A,B\n1,2", true, Delimiter::Auto);
//! assert_eq!(
//!     html,
//!     "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>"
//! );
//! ```
//!
//! ### Detection and Parsing
//!
//! ```rust
//! use tabclip::{detect_format, parse_markdown_table, Format};
//!
//! let md = "| A | B |\n|---|---|\n| 1 | 2 |";
//! assert_eq!(detect_format(md), Format::Markdown);
//! assert_eq!(parse_markdown_table(md), vec![vec!["A", "B"], vec!["1", "2"]]);
//! ```
//!
//! ### Full Pipeline
//!
//! ```rust
//! use tabclip::{convert, ConvertOptions, ConversionError};
//!
//! let output = convert("Name\\tAge\\nAnn\\t30", &ConvertOptions::default()).unwrap();
//! assert_eq!(output.format.name(), "tsv");
//! assert!(output.html.starts_with("<table><tr><th>Name</th>"));
//!
//! assert_eq!(
//!     convert("   ", &ConvertOptions::default()).unwrap_err(),
//!     ConversionError::EmptyInput
//! );
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static glyph tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::{
    convert, detect_format, escape_html, parse_boxdraw_table, parse_csv, parse_csv_line,
    parse_grid, parse_markdown_table, parse_space_separated, parse_tsv, render_grid, scan_csv,
    to_html_table, tsv_to_html_table, unescape_literals, wrap_html_document, ConvertOptions,
    CsvScan, Delimiter, Format, Grid, Row,
};

// Re-export data modules
pub use crate::data::glyphs;

// Re-export utilities
pub use crate::utils::clipboard;
pub use crate::utils::clipboard::{ClipboardError, ClipboardPayload, ClipboardSink};
pub use crate::utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
};

/// Convert and hand the result to a clipboard sink in one step
///
/// Returns the conversion output so callers can report the format and
/// any warnings.
pub fn convert_to_clipboard<S: ClipboardSink + ?Sized>(
    input: &str,
    options: &ConvertOptions,
    sink: &S,
) -> ConversionResult<ConversionOutput> {
    let output = convert(input, options)?;
    let payload = ClipboardPayload::new(output.html.as_str());
    sink.copy(&payload)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clipboard::{MemoryClipboard, NoopClipboard};

    #[test]
    fn test_to_html_table_detects_markdown() {
        let result = to_html_table("| 名前 | 年齢 |\n|---|---|\n| 田中 | 30 |", true, Delimiter::Auto);
        assert_eq!(
            result,
            "<table><tr><th>名前</th><th>年齢</th></tr><tr><td>田中</td><td>30</td></tr></table>"
        );
    }

    #[test]
    fn test_convert_to_clipboard() {
        let clipboard = MemoryClipboard::new();
        let output =
            convert_to_clipboard("A,B\n1,2", &ConvertOptions::default(), &clipboard).unwrap();

        assert_eq!(output.format, Format::Csv);
        let payload = clipboard.last().unwrap();
        assert_eq!(payload.html, output.html);
        assert_eq!(output.plain_text, "A,B\n1,2");
    }

    #[test]
    fn test_convert_to_clipboard_empty_input_skips_sink() {
        let clipboard = MemoryClipboard::new();
        let err = convert_to_clipboard("\n", &ConvertOptions::default(), &clipboard).unwrap_err();
        assert_eq!(err, ConversionError::EmptyInput);
        assert!(clipboard.is_empty());
    }

    #[test]
    fn test_convert_to_clipboard_sink_failure() {
        let err = convert_to_clipboard("A,B", &ConvertOptions::default(), &NoopClipboard)
            .unwrap_err();
        assert!(matches!(err, ConversionError::ClipboardError { .. }));
    }
}
