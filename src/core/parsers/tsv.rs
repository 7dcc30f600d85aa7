//! Tab-separated splitting
//!
//! The fallback dialect: text with no other recognizable structure is
//! treated as one tab-separated row per line, which degrades to a single
//! column when no tabs are present.

use super::Grid;

/// Parse tab-separated text into a grid
///
/// Blank lines before the first row and after the last one are dropped.
/// Tabs are never trimmed, so empty cells keep their position even at the
/// edges of the input.
pub fn parse_tsv(input: &str) -> Grid {
    let lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let start = lines.iter().position(|line| !is_blank(line));
    let end = lines.iter().rposition(|line| !is_blank(line));

    let rows: Grid = match (start, end) {
        (Some(start), Some(end)) => lines[start..=end]
            .iter()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect(),
        _ => Vec::new(),
    };

    log::debug!("tsv: parsed {} row(s)", rows.len());
    rows
}

/// A line with no cells at all: whitespace only and no tab
fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c != '\t' && c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(
            parse_tsv("A\tB\tC\n1\t2\t3"),
            vec![vec!["A", "B", "C"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn test_empty_cells_keep_position() {
        assert_eq!(
            parse_tsv("A\t\tC\n1\t\t3"),
            vec![vec!["A", "", "C"], vec!["1", "", "3"]]
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            parse_tsv("\nA\tB\n1\t2\n"),
            vec![vec!["A", "B"], vec!["1", "2"]]
        );
    }

    #[test]
    fn test_leading_empty_cell_kept() {
        assert_eq!(
            parse_tsv("\tQ1\tQ2\nA\t1\t2"),
            vec![vec!["", "Q1", "Q2"], vec!["A", "1", "2"]]
        );
    }

    #[test]
    fn test_trailing_empty_cell_kept() {
        assert_eq!(
            parse_tsv("A\tB\n1\t\n"),
            vec![vec!["A", "B"], vec!["1", ""]]
        );
    }

    #[test]
    fn test_blank_input_has_no_rows() {
        assert!(parse_tsv("").is_empty());
        assert!(parse_tsv(" \n\r\n").is_empty());
    }

    #[test]
    fn test_crlf() {
        assert_eq!(
            parse_tsv("A\tB\r\n1\t2\r\n"),
            vec![vec!["A", "B"], vec!["1", "2"]]
        );
    }

    #[test]
    fn test_undelimited_text_is_one_column() {
        assert_eq!(parse_tsv("ABC\nDEF"), vec![vec!["ABC"], vec!["DEF"]]);
    }
}
