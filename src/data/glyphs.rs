//! Box-drawing glyph tables
//!
//! Classifies characters from the Unicode Box Drawing block (U+2500–U+257F)
//! into the roles they play when a table is framed with them:
//! vertical bars delimit cells, everything else draws borders and
//! separator lines.

use phf::phf_set;

/// Vertical bars that separate cells on a content line
pub static VERTICAL_GLYPHS: phf::Set<char> = phf_set! {
    // light, heavy, double
    '│', '┃', '║',
    // dashed
    '╎', '╏', '┆', '┇', '┊', '┋',
};

/// Horizontal strokes used in border and separator lines
pub static HORIZONTAL_GLYPHS: phf::Set<char> = phf_set! {
    '─', '━', '═',
    '╌', '╍', '┄', '┅', '┈', '┉',
    // half strokes
    '╴', '╶', '╸', '╺', '╼', '╾',
};

/// Corners, including rounded ones
pub static CORNER_GLYPHS: phf::Set<char> = phf_set! {
    '┌', '┐', '└', '┘',
    '┏', '┓', '┗', '┛',
    '┍', '┑', '┕', '┙', '┎', '┒', '┖', '┚',
    '╔', '╗', '╚', '╝',
    '╒', '╕', '╘', '╛', '╓', '╖', '╙', '╜',
    '╭', '╮', '╯', '╰',
};

/// T-junctions and crossings
pub static JUNCTION_GLYPHS: phf::Set<char> = phf_set! {
    // light
    '├', '┤', '┬', '┴', '┼',
    // heavy
    '┣', '┫', '┳', '┻', '╋',
    // mixed light/heavy
    '┝', '┞', '┟', '┠', '┡', '┢',
    '┥', '┦', '┧', '┨', '┩', '┪',
    '┭', '┮', '┯', '┰', '┱', '┲',
    '┵', '┶', '┷', '┸', '┹', '┺',
    '┽', '┾', '┿', '╀', '╁', '╂', '╃', '╄', '╅', '╆', '╇', '╈', '╉', '╊',
    // double and mixed single/double
    '╠', '╣', '╦', '╩', '╬',
    '╞', '╟', '╡', '╢', '╤', '╥', '╧', '╨', '╪', '╫',
};

/// Check if a character separates cells on a framed content line
pub fn is_vertical(c: char) -> bool {
    VERTICAL_GLYPHS.contains(&c)
}

/// Check if a character is a horizontal border stroke
pub fn is_horizontal(c: char) -> bool {
    HORIZONTAL_GLYPHS.contains(&c)
}

/// Check if a character can only appear on a border or separator line
pub fn is_rule(c: char) -> bool {
    is_horizontal(c) || CORNER_GLYPHS.contains(&c) || JUNCTION_GLYPHS.contains(&c)
}

/// Check if a character belongs to any of the glyph tables
pub fn is_box_drawing(c: char) -> bool {
    is_vertical(c) || is_rule(c)
}

/// Whether a line is a border or separator line such as `├───┼───┤`.
///
/// The trimmed line must be non-empty, built only from rule glyphs and
/// whitespace, and carry at least one horizontal stroke.
pub fn is_border_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(is_horizontal)
        && trimmed.chars().all(|c| is_rule(c) || c.is_whitespace())
}

/// Whether a line carries cell content between vertical bars
pub fn is_framed_row(line: &str) -> bool {
    !is_border_line(line) && line.chars().any(is_vertical)
}
