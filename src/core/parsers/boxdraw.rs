//! Box-drawing table parsing
//!
//! Handles tables drawn with Unicode box-drawing characters, as printed by
//! database shells, `tabulate`-style tools and chat assistants:
//!
//! ```text
//! ┌──────┬─────┐
//! │ Name │ Age │
//! ├──────┼─────┤
//! │ Ann  │ 30  │
//! └──────┴─────┘
//! ```
//!
//! Border and separator lines are dropped. Header and data rows are not
//! told apart here; every framed line becomes a row in source order.

use super::{split_framed, Grid};
use crate::data::glyphs::{is_border_line, is_framed_row, is_vertical};

/// Parse a box-drawing table into a grid
pub fn parse_boxdraw_table(input: &str) -> Grid {
    let mut rows = Grid::new();

    for line in input.trim().split('\n') {
        let trimmed = line.trim();

        if is_border_line(trimmed) {
            log::trace!("boxdraw: skipping border {:?}", trimmed);
            continue;
        }
        if !is_framed_row(trimmed) {
            continue;
        }

        let cells = split_framed(trimmed, is_vertical);
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    log::debug!("boxdraw: parsed {} row(s)", rows.len());
    rows
}
