//! Markdown pipe-table parsing
//!
//! Handles tables as rendered in chat messages and READMEs:
//!
//! ```text
//! | A | B |
//! |---|:-:|
//! | 1 | 2 |
//! ```
//!
//! The alignment row is dropped, outer pipes are optional and leading
//! indentation is ignored.

use lazy_static::lazy_static;
use regex::Regex;

use super::{split_framed, Grid};

lazy_static! {
    /// Alignment row: only pipes, dashes, colons and whitespace
    static ref SEPARATOR_ROW: Regex = Regex::new(r"^\|?[\s\-:|]+\|?$").unwrap();
}

/// Whether a trimmed line is the `|---|---|` alignment row
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line)
}

/// Parse a Markdown pipe table into a grid
pub fn parse_markdown_table(input: &str) -> Grid {
    let mut rows = Grid::new();

    for line in input.trim().split('\n') {
        let trimmed = line.trim();

        if is_separator_row(trimmed) {
            log::trace!("markdown: skipping separator row {:?}", trimmed);
            continue;
        }

        let cells = split_framed(trimmed, |c| c == '|');
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    log::debug!("markdown: parsed {} row(s)", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rows() {
        assert!(is_separator_row("|---|---|---|"));
        assert!(is_separator_row("| :--- | ---: | :-: |"));
        assert!(is_separator_row("--- | ---"));
        assert!(!is_separator_row("| A | B |"));
        assert!(!is_separator_row(""));
    }

    #[test]
    fn test_basic() {
        assert_eq!(
            parse_markdown_table("|A|B|C|\n|---|---|---|\n|1|2|3|"),
            vec![vec!["A", "B", "C"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn test_padded_cells() {
        assert_eq!(
            parse_markdown_table("| 品名 | 金額 |\n| --- | --- |\n| カフェ | 560 |"),
            vec![vec!["品名", "金額"], vec!["カフェ", "560"]]
        );
    }

    #[test]
    fn test_interior_empty_cell_kept() {
        assert_eq!(
            parse_markdown_table("| A | | C |\n|---|---|---|\n| 1 |  | 3 |"),
            vec![vec!["A", "", "C"], vec!["1", "", "3"]]
        );
    }

    #[test]
    fn test_indented() {
        assert_eq!(
            parse_markdown_table("    | A | B |\n    |---|---|\n    | 1 | 2 |"),
            vec![vec!["A", "B"], vec!["1", "2"]]
        );
    }

    #[test]
    fn test_without_outer_pipes() {
        assert_eq!(
            parse_markdown_table("A | B\n--- | ---\n1 | 2"),
            vec![vec!["A", "B"], vec!["1", "2"]]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(
            parse_markdown_table("| A |\n\n| 1 |\n"),
            vec![vec!["A"], vec!["1"]]
        );
    }
}
