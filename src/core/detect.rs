//! Table format detection
//!
//! Classifies a blob of text as one of the five supported dialects.
//! Structural framing (Markdown pipes, box-drawing borders) is checked
//! before any delimiter counting so that commas or tabs inside a framed
//! table cannot steer the decision.

use std::fmt;
use std::str::FromStr;

use crate::data::glyphs::{is_box_drawing, is_framed_row, is_horizontal};
use crate::utils::error::ConversionError;

/// A resolved table dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Tab-separated values, also the fallback for undelimited text
    Tsv,
    /// Comma-separated values with double-quote quoting
    Csv,
    /// Columns aligned with runs of two or more spaces
    Spaces,
    /// Pipe-delimited Markdown table
    Markdown,
    /// Table framed with Unicode box-drawing characters
    BoxDraw,
}

impl Format {
    /// All resolved formats, in detection priority order
    pub const ALL: [Format; 5] = [
        Format::Markdown,
        Format::BoxDraw,
        Format::Tsv,
        Format::Csv,
        Format::Spaces,
    ];

    /// Lowercase name, e.g. `csv`
    pub fn name(&self) -> &'static str {
        match self {
            Format::Tsv => "tsv",
            Format::Csv => "csv",
            Format::Spaces => "spaces",
            Format::Markdown => "markdown",
            Format::BoxDraw => "boxdraw",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Delimiter::from_str(s)? {
            Delimiter::Auto => Err(ConversionError::invalid(
                "'auto' is a request mode, not a table format",
            )),
            Delimiter::Fixed(format) => Ok(format),
        }
    }
}

/// Requested format: either a fixed dialect or auto-detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// Detect the dialect from the input
    #[default]
    Auto,
    /// Parse as the given dialect without detection
    Fixed(Format),
}

impl Delimiter {
    pub const TSV: Delimiter = Delimiter::Fixed(Format::Tsv);
    pub const CSV: Delimiter = Delimiter::Fixed(Format::Csv);
    pub const SPACES: Delimiter = Delimiter::Fixed(Format::Spaces);
    pub const MARKDOWN: Delimiter = Delimiter::Fixed(Format::Markdown);
    pub const BOXDRAW: Delimiter = Delimiter::Fixed(Format::BoxDraw);

    /// Resolve to a concrete format, running detection for `Auto`
    pub fn resolve(&self, input: &str) -> Format {
        match self {
            Delimiter::Auto => detect_format(input),
            Delimiter::Fixed(format) => *format,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Delimiter::Auto)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Auto => "auto",
            Delimiter::Fixed(format) => format.name(),
        }
    }
}

impl From<Format> for Delimiter {
    fn from(format: Format) -> Self {
        Delimiter::Fixed(format)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Delimiter {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Delimiter::Auto),
            "tsv" => Ok(Delimiter::TSV),
            "csv" => Ok(Delimiter::CSV),
            "spaces" => Ok(Delimiter::SPACES),
            "markdown" | "md" => Ok(Delimiter::MARKDOWN),
            "boxdraw" | "box" => Ok(Delimiter::BOXDRAW),
            other => Err(ConversionError::invalid(format!(
                "unknown format '{}' (expected auto, tsv, csv, spaces, markdown or boxdraw)",
                other
            ))),
        }
    }
}

/// The line format decisions are based on: the first non-blank line
fn first_line(input: &str) -> &str {
    input
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
}

fn looks_like_markdown(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') || trimmed.matches('|').count() >= 2
}

/// Box tables announce themselves through their borders, which usually
/// sit above the header row, so the whole text is scanned. A stroke alone
/// is not enough: at least one framed row must carry content.
fn looks_like_boxdraw(input: &str) -> bool {
    if !input.chars().any(is_box_drawing) {
        return false;
    }
    input.split('\n').any(is_framed_row) && input.chars().any(is_horizontal)
}

/// Detect the table format of a text blob
///
/// Priority, first match wins:
/// 1. Markdown: first line starts with `|` or holds two pipes
/// 2. Box-drawing: a framed row plus a horizontal stroke anywhere
/// 3. TSV: tab on the first line
/// 4. CSV: comma on the first line
/// 5. Spaces: two consecutive spaces on the first line
/// 6. Otherwise TSV
pub fn detect_format(input: &str) -> Format {
    let line = first_line(input);

    let format = if looks_like_markdown(line) {
        Format::Markdown
    } else if looks_like_boxdraw(input) {
        Format::BoxDraw
    } else if line.contains('\t') {
        Format::Tsv
    } else if line.contains(',') {
        Format::Csv
    } else if line.contains("  ") {
        Format::Spaces
    } else {
        Format::Tsv
    };

    log::debug!("detected format {} from first line {:?}", format, line);
    format
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tsv() {
        assert_eq!(detect_format("A\tB\tC\n1\t2\t3"), Format::Tsv);
    }

    #[test]
    fn test_detect_csv() {
        assert_eq!(detect_format("A,B,C\n1,2,3"), Format::Csv);
    }

    #[test]
    fn test_tab_wins_over_comma() {
        assert_eq!(detect_format("A,B\tC\n1,2\t3"), Format::Tsv);
    }

    #[test]
    fn test_detect_spaces() {
        assert_eq!(detect_format("名前  年齢  職業\n田中  30  エンジニア"), Format::Spaces);
    }

    #[test]
    fn test_single_space_is_not_spaces() {
        assert_eq!(detect_format("Hello World"), Format::Tsv);
    }

    #[test]
    fn test_detect_markdown() {
        assert_eq!(detect_format("| A | B | C |"), Format::Markdown);
        assert_eq!(detect_format("A | B | C\n--- | --- | ---"), Format::Markdown);
        assert_eq!(detect_format("  |A|B|\n  |-|-|"), Format::Markdown);
    }

    #[test]
    fn test_markdown_wins_over_delimiters() {
        assert_eq!(detect_format("|A\tB|C,D|"), Format::Markdown);
        assert_eq!(detect_format("| a, b | c  d |"), Format::Markdown);
    }

    #[test]
    fn test_single_pipe_is_not_markdown() {
        assert_eq!(detect_format("a|b,c"), Format::Csv);
    }

    #[test]
    fn test_detect_boxdraw() {
        let table = "┌───┬───┐\n│ A │ B │\n├───┼───┤\n│ 1 │ 2 │\n└───┴───┘";
        assert_eq!(detect_format(table), Format::BoxDraw);
    }

    #[test]
    fn test_detect_boxdraw_without_top_border() {
        let table = "│ A, x │ B │\n╞═══╪═══╡\n│ 1 │ 2 │";
        assert_eq!(detect_format(table), Format::BoxDraw);
    }

    #[test]
    fn test_border_line_without_framed_rows_is_not_boxdraw() {
        assert_eq!(detect_format("a,b\n───\nc,d"), Format::Csv);
        assert_eq!(detect_format("┌───┐\n└───┘"), Format::Tsv);
    }

    #[test]
    fn test_framed_rows_without_strokes_are_not_boxdraw() {
        assert_eq!(detect_format("│ A │ B │"), Format::Tsv);
    }

    #[test]
    fn test_default_is_tsv() {
        assert_eq!(detect_format("ABC"), Format::Tsv);
        assert_eq!(detect_format(""), Format::Tsv);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        assert_eq!(detect_format("\n\nA,B\n1,2"), Format::Csv);
    }

    #[test]
    fn test_delimiter_resolve() {
        assert_eq!(Delimiter::Auto.resolve("A,B"), Format::Csv);
        assert_eq!(Delimiter::TSV.resolve("A,B"), Format::Tsv);
        assert!(Delimiter::Auto.is_auto());
        assert!(!Delimiter::CSV.is_auto());
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("auto".parse::<Delimiter>().unwrap(), Delimiter::Auto);
        assert_eq!("CSV".parse::<Delimiter>().unwrap(), Delimiter::CSV);
        assert_eq!("md".parse::<Delimiter>().unwrap(), Delimiter::MARKDOWN);
        assert_eq!("box".parse::<Delimiter>().unwrap(), Delimiter::BOXDRAW);
        assert!("xml".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_format_from_str_rejects_auto() {
        assert_eq!("spaces".parse::<Format>().unwrap(), Format::Spaces);
        assert!("auto".parse::<Format>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
            assert_eq!(Delimiter::from(format).to_string(), format.to_string());
        }
    }
}
