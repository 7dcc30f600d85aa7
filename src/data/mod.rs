//! Data layer - Static glyph tables
//!
//! This module contains the static data used for table detection:
//! - Box-drawing glyph sets (vertical bars, horizontal strokes, corners, junctions)

pub mod glyphs;

// Re-export commonly used items
pub use glyphs::{
    is_border_line, is_box_drawing, is_framed_row, is_horizontal, is_rule, is_vertical,
    CORNER_GLYPHS, HORIZONTAL_GLYPHS, JUNCTION_GLYPHS, VERTICAL_GLYPHS,
};
