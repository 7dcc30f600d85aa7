//! Quoted-field CSV scanner
//!
//! A field may be wrapped in double quotes. Inside quotes `""` stands for a
//! literal quote, and commas and line breaks are content. Outside quotes a
//! comma ends the field and `\n` or `\r\n` ends the row. An unterminated
//! quote is not an error: the scan simply runs to the end of input.

use super::{Grid, Row};

/// Result of scanning CSV text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvScan {
    /// Parsed rows
    pub rows: Grid,
    /// Whether the input ended inside a quoted field
    pub unterminated_quote: bool,
}

/// Scanner state shared by the line and grid parsers
struct CsvScanner {
    rows: Grid,
    row: Row,
    cell: String,
    in_quotes: bool,
    split_rows: bool,
}

impl CsvScanner {
    fn new(split_rows: bool) -> Self {
        CsvScanner {
            rows: Vec::new(),
            row: Vec::new(),
            cell: String::new(),
            in_quotes: false,
            split_rows,
        }
    }

    fn end_cell(&mut self) {
        self.row.push(std::mem::take(&mut self.cell));
    }

    fn end_row(&mut self) {
        self.end_cell();
        self.rows.push(std::mem::take(&mut self.row));
    }

    fn scan(mut self, input: &str) -> CsvScan {
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_quotes {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        self.cell.push('"');
                    }
                    '"' => self.in_quotes = false,
                    _ => self.cell.push(c),
                }
                continue;
            }

            match c {
                '"' => self.in_quotes = true,
                ',' => self.end_cell(),
                '\n' if self.split_rows => self.end_row(),
                '\r' if self.split_rows && chars.peek() == Some(&'\n') => {
                    chars.next();
                    self.end_row();
                }
                _ => self.cell.push(c),
            }
        }

        let unterminated_quote = self.in_quotes;
        self.end_cell();

        // A trailing line break leaves a lone empty cell behind; drop it
        let is_blank = self.row.len() == 1 && self.row[0].is_empty();
        if !is_blank {
            self.rows.push(self.row);
        }

        if unterminated_quote {
            log::debug!("csv input ended inside a quoted field");
        }

        CsvScan {
            rows: self.rows,
            unterminated_quote,
        }
    }
}

/// Scan CSV text into rows, reporting whether a quote was left open
pub fn scan_csv(input: &str) -> CsvScan {
    CsvScanner::new(true).scan(input)
}

/// Parse CSV text into a grid
///
/// Line breaks inside quoted fields stay in the cell, so
/// `A,B\n"line1\nline2",C` yields two rows, not three.
pub fn parse_csv(input: &str) -> Grid {
    let scan = scan_csv(input);
    log::debug!("csv: parsed {} row(s)", scan.rows.len());
    scan.rows
}

/// Parse a single CSV line into cells
///
/// Uses the same quoting rules as [`parse_csv`] but treats line breaks as
/// ordinary content. Always returns at least one cell.
pub fn parse_csv_line(line: &str) -> Row {
    CsvScanner::new(false)
        .scan(line)
        .rows
        .pop()
        .unwrap_or_else(|| vec![String::new()])
}
