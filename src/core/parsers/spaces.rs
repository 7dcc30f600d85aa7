//! Space-aligned column splitting
//!
//! Console tools often align columns with padding. Two or more
//! consecutive spaces separate columns; a single space stays inside a cell.

use lazy_static::lazy_static;
use regex::Regex;

use super::Grid;

lazy_static! {
    /// A column gap: two or more spaces
    static ref COLUMN_GAP: Regex = Regex::new(r" {2,}").unwrap();
}

/// Parse space-aligned text into a grid
pub fn parse_space_separated(input: &str) -> Grid {
    let rows: Grid = input
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            COLUMN_GAP
                .split(line)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    log::debug!("spaces: parsed {} row(s)", rows.len());
    rows
}
