//! Text rendering with the built-in 3x5 font
//!
//! Characters without a glyph (anything outside the table, including
//! non-ASCII) are drawn as blank cells and still advance the cursor.
//! [`glyph`] reports them as `None` for callers that want to detect this.

pub mod font;

pub use font::{
    Glyph, CHAR_ADVANCE, CHAR_SPACING, FIRST_CHAR, FONT_HEIGHT, FONT_WIDTH, GLYPHS, GLYPH_COUNT,
};

use crate::raster::plot;
use crate::traits::PixelSurface;

/// Look up the glyph for a character
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let index = (c as u32).checked_sub(FIRST_CHAR)?;
    GLYPHS.get(index as usize)
}

/// Glyph for a character, blank when the font has none
pub fn glyph_or_blank(c: char) -> &'static Glyph {
    glyph(c).unwrap_or(&Glyph::BLANK)
}

/// Rendered width of `text` in columns, trailing spacing included
pub fn text_width(text: &str) -> usize {
    text.chars().count() * CHAR_ADVANCE
}

/// Draw one character with its top-left cell at `(x, y)`
///
/// Only lit cells are written; the background is left as it was.
pub fn draw_char<S: PixelSurface + ?Sized>(surface: &mut S, x: u8, y: u8, c: char, brightness: u8) {
    draw_char_at(surface, x as i32, y as i32, c, brightness);
}

/// Draw a string left to right starting at `(x, y)`
pub fn draw_string<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: u8,
    y: u8,
    text: &str,
    brightness: u8,
) {
    draw_string_at(surface, x as i32, y as i32, text, brightness);
}

/// [`draw_char`] with a signed origin, for text partly left of the canvas
pub(crate) fn draw_char_at<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    c: char,
    brightness: u8,
) {
    for (col, row) in glyph_or_blank(c).lit_cells() {
        plot(surface, x + col as i32, y + row as i32, brightness);
    }
}

/// [`draw_string`] with a signed origin
pub(crate) fn draw_string_at<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    text: &str,
    brightness: u8,
) {
    let mut cursor = x;
    for c in text.chars() {
        draw_char_at(surface, cursor, y, c, brightness);
        cursor += CHAR_ADVANCE as i32;
    }
}
