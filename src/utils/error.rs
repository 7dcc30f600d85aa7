//! Error handling for tabclip conversions
//!
//! This module provides a unified error type and result type for the
//! conversion pipeline. Parsers never fail on their own; the errors here
//! come from the edges (blank input, unknown format names, I/O, clipboard).

use std::fmt;

use crate::core::detect::Format;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input was blank after trimming, nothing to convert
    EmptyInput,
    /// Invalid input, e.g. an unknown format name
    InvalidInput { message: String },
    /// IO error (for file and stdin operations)
    IoError { message: String },
    /// Handing the HTML to the clipboard failed
    ClipboardError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::EmptyInput => write!(f, "No data provided"),
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConversionError::ClipboardError { message } => {
                write!(f, "Failed to copy to clipboard: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn at_line(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The rendered HTML table fragment
    pub html: String,
    /// The input after literal unescaping, used as the plain-text flavor
    pub plain_text: String,
    /// The format the input was parsed as
    pub format: Format,
    /// Whether `format` came from auto-detection rather than the caller
    pub detected: bool,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(html: String, plain_text: String, format: Format, detected: bool) -> Self {
        Self {
            html,
            plain_text,
            format,
            detected,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<ConversionWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        ConversionError::ClipboardError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        assert_eq!(ConversionError::EmptyInput.to_string(), "No data provided");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = ConversionError::invalid("unknown format 'xml'");
        let msg = err.to_string();
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("xml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::IoError { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_warning_display() {
        let warn = ConversionWarning::at_line("row has 2 cells, expected 3", 4)
            .with_suggestion("check for a missing delimiter");
        assert_eq!(
            warn.to_string(),
            "Warning at line 4: row has 2 cells, expected 3 (check for a missing delimiter)"
        );

        let plain = ConversionWarning::new("unterminated quoted field");
        assert_eq!(plain.to_string(), "Warning: unterminated quoted field");
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new(
            "<table></table>".to_string(),
            String::new(),
            Format::Tsv,
            true,
        );
        assert!(!output.has_warnings());

        let output = output.with_warnings(vec![ConversionWarning::new("test warning")]);
        assert!(output.has_warnings());
    }
}
