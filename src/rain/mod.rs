//! Matrix-style background rain.

/// Falling glyph columns.
pub mod field;
/// Glyph sets and stroke shapes.
pub mod glyphs;
