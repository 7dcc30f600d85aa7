//! Conversion entry point
//!
//! Ties the pipeline together: literal unescaping, blank-input rejection,
//! format resolution, parsing, rendering and warning collection.

use crate::core::detect::{Delimiter, Format};
use crate::core::parsers::{parse_grid, scan_csv, Grid};
use crate::core::render::render_grid;
use crate::core::unescape::{has_literal_escapes, unescape_literals};
use crate::utils::error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

/// Table conversion options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Render the first row as `<th>` header cells
    pub has_header: bool,
    /// Requested format; `Auto` runs detection
    pub delimiter: Delimiter,
    /// Turn literal `\t`, `\n`, `\r` sequences into control characters first
    pub unescape_literals: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: Delimiter::Auto,
            unescape_literals: true,
        }
    }
}

impl ConvertOptions {
    /// No header row and no unescaping: the text is taken exactly as given
    pub fn raw() -> Self {
        Self {
            has_header: false,
            delimiter: Delimiter::Auto,
            unescape_literals: false,
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Convert tabular text into an HTML table fragment.
///
/// Fails only with [`ConversionError::EmptyInput`] when there is nothing to
/// convert. Oddities in the input (an unterminated quote, ragged rows) are
/// reported as warnings on the output instead.
pub fn convert(input: &str, options: &ConvertOptions) -> ConversionResult<ConversionOutput> {
    let text = if options.unescape_literals && has_literal_escapes(input) {
        log::debug!("unescaping literal \\t, \\n and \\r sequences");
        unescape_literals(input)
    } else {
        input.to_string()
    };

    if text.trim().is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let format = options.delimiter.resolve(&text);
    let mut warnings = Vec::new();

    let grid = if format == Format::Csv {
        let scan = scan_csv(text.trim());
        if scan.unterminated_quote {
            warnings.push(
                ConversionWarning::new("unterminated quoted field")
                    .with_suggestion("the last field runs to the end of the input"),
            );
        }
        scan.rows
    } else {
        parse_grid(&text, format)
    };

    if grid.is_empty() {
        warnings.push(ConversionWarning::new(format!(
            "no table rows found when parsing as {}",
            format
        )));
    }
    warnings.extend(ragged_row_warnings(&grid));

    log::debug!(
        "converted {} row(s) as {} ({})",
        grid.len(),
        format,
        if options.delimiter.is_auto() {
            "auto-detected"
        } else {
            "specified"
        }
    );

    let html = render_grid(&grid, options.has_header);
    Ok(ConversionOutput::new(html, text, format, options.delimiter.is_auto())
        .with_warnings(warnings))
}

/// Warn about rows whose width differs from the first row.
///
/// Positions are 1-based row numbers, which match input lines except where
/// a quoted CSV cell spans several lines.
fn ragged_row_warnings(grid: &Grid) -> Vec<ConversionWarning> {
    let Some(expected) = grid.first().map(Vec::len) else {
        return Vec::new();
    };

    grid.iter()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| row.len() != expected)
        .map(|(index, row)| {
            ConversionWarning::at_line(
                format!("row has {} cell(s), expected {}", row.len(), expected),
                index + 1,
            )
        })
        .collect()
}
