//! Dot-matrix glyphs and pixel layout for the murmur clock.
//!
//! A glyph is a set of lit cells on a 5×7 grid plus width/height metrics.
//! The clock only ever needs digits, the colon, and a `?` placeholder that
//! any unmapped character falls back to. Glyph sources are behind a trait so
//! a sampled-font provider could slot in without touching the morph core.

use std::collections::HashMap;

use murmur_core::Pixel;

/// One character's dot pattern plus layout metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Lit cells as (col, row) grid indices, row-major scan order.
    pub cells: Vec<(i32, i32)>,
    /// Width in grid cells.
    pub width: i32,
    /// Height in grid cells above the baseline.
    pub height: i32,
    /// Cells hanging below the baseline. Zero for the bitmap table; kept for
    /// glyph sources with real font metrics.
    pub descent: i32,
}

/// Maps characters to glyphs; unknown characters resolve to a placeholder.
pub trait GlyphSource {
    /// Look up the glyph for `c`, falling back to the `?` glyph.
    fn glyph(&self, c: char) -> &Glyph;
}

/// 5×7 digits (`.` = off, `X` = lit), transcribed from a cashier-style
/// dot-matrix face.
const DIGITS: [[&str; 7]; 10] = [
    // 0
    [".XXX.", "XX.XX", "XX.XX", "XX.XX", "XX.XX", "XX.XX", ".XXX."],
    // 1
    ["..XX.", ".XXX.", "..XX.", "..XX.", "..XX.", "..XX.", ".XXXX"],
    // 2
    [".XXX.", "XX.XX", "...XX", "..XX.", ".XX..", "XX...", "XXXXX"],
    // 3
    ["XXXXX", "..XX.", ".XX..", "..XX.", "...XX", "XX.XX", ".XXX."],
    // 4
    ["...XX", "..XXX", ".XXXX", "XX.XX", "XXXXX", "...XX", "...XX"],
    // 5
    ["XXXXX", "XX...", "XXXX.", "...XX", "...XX", "XX.XX", ".XXX."],
    // 6
    ["..XX.", ".XX..", "XX...", "XXXX.", "XX.XX", "XX.XX", ".XXX."],
    // 7
    ["XXXXX", "...XX", "..XX.", ".XX..", "XX...", "XX...", "XX..."],
    // 8
    [".XXX.", "XX.XX", "XX.XX", ".XXX.", "XX.XX", "XX.XX", ".XXX."],
    // 9
    [".XXX.", "XX.XX", "XX.XX", ".XXXX", "...XX", "..XX.", ".XX.."],
];

/// Colon separator.
const COLON: [&str; 7] = [".....", "..XX.", "..XX.", ".....", "..XX.", "..XX.", "....."];

/// Placeholder for unmapped characters.
const QUESTION: [&str; 7] = [".XXX.", "X...X", "...X.", "..X..", "..X..", ".....", "..X.."];

/// Decode a `.`/`X` row pattern into a [`Glyph`].
fn decode(rows: &[&str]) -> Glyph {
    let mut cells = Vec::new();
    let mut width = 0;
    for (row, pattern) in rows.iter().enumerate() {
        width = width.max(pattern.len() as i32);
        for (col, c) in pattern.chars().enumerate() {
            if c != '.' {
                cells.push((col as i32, row as i32));
            }
        }
    }
    Glyph {
        cells,
        width,
        height: rows.len() as i32,
        descent: 0,
    }
}

/// The hand-authored bitmap glyph table: digits, colon, and the fallback.
#[derive(Debug, Clone)]
pub struct DotMatrixFont {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl Default for DotMatrixFont {
    fn default() -> Self {
        Self::new()
    }
}

impl DotMatrixFont {
    /// Decode the full table. Built once at startup, read-only after.
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        for (digit, rows) in DIGITS.iter().enumerate() {
            let c = char::from(b'0' + digit as u8);
            glyphs.insert(c, decode(rows));
        }
        glyphs.insert(':', decode(&COLON));
        Self {
            glyphs,
            fallback: decode(&QUESTION),
        }
    }
}

impl GlyphSource for DotMatrixFont {
    fn glyph(&self, c: char) -> &Glyph {
        self.glyphs.get(&c).unwrap_or(&self.fallback)
    }
}

/// Spacing constants for laying glyphs out as dot centers.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    /// Distance between neighboring dot centers within a glyph.
    pub pitch: f64,
    /// Extra gap between adjacent characters.
    pub inter_char: f64,
    /// Advance for a space, in glyph cells.
    pub space_cells: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            pitch: 7.0,
            inter_char: 10.0,
            space_cells: 3,
        }
    }
}

/// Decompose a string into dot centers, scanning characters left to right
/// and each glyph's cells in row-major order.
///
/// Spaces advance the cursor without emitting dots; a newline starts a new
/// line below the tallest glyph of the current one. All coordinates come
/// from integer cell indices times the layout constants, so dots from equal
/// characters at equal positions compare exactly equal.
pub fn string_to_pixels(s: &str, font: &impl GlyphSource, m: &LayoutMetrics) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    let mut x_pos = 0.0;
    let mut y_pos = 0.0;
    let mut line_cells = 7;
    for c in s.chars() {
        match c {
            '\n' => {
                x_pos = 0.0;
                y_pos += f64::from(line_cells) * m.pitch + 2.0 * m.inter_char;
                line_cells = 7;
            }
            ' ' => {
                x_pos += f64::from(m.space_cells) * m.pitch;
            }
            _ => {
                let glyph = font.glyph(c);
                line_cells = line_cells.max(glyph.height + glyph.descent);
                for &(col, row) in &glyph.cells {
                    pixels.push(Pixel::new(
                        x_pos + f64::from(col) * m.pitch + m.pitch / 2.0,
                        y_pos + f64::from(row) * m.pitch + m.pitch / 2.0,
                    ));
                }
                x_pos += f64::from(glyph.width) * m.pitch + m.inter_char;
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_has_four_dots() {
        let font = DotMatrixFont::new();
        assert_eq!(font.glyph(':').cells.len(), 4);
    }

    #[test]
    fn digits_are_five_by_seven() {
        let font = DotMatrixFont::new();
        for d in '0'..='9' {
            let g = font.glyph(d);
            assert_eq!((g.width, g.height), (5, 7), "digit {d}");
            assert!(!g.cells.is_empty());
        }
    }

    #[test]
    fn unknown_characters_fall_back_to_placeholder() {
        let font = DotMatrixFont::new();
        assert_eq!(font.glyph('Z'), font.glyph('?'));
        assert_eq!(font.glyph('Z'), font.glyph('林'));
    }

    #[test]
    fn layout_centers_dots_on_the_grid() {
        let font = DotMatrixFont::new();
        let m = LayoutMetrics::default();
        // '1' starts with cells (2,0) and (3,0) in row-major order.
        let pix = string_to_pixels("1", &font, &m);
        assert_eq!(pix[0], Pixel::new(2.0 * 7.0 + 3.5, 3.5));
        assert_eq!(pix[1], Pixel::new(3.0 * 7.0 + 3.5, 3.5));
    }

    #[test]
    fn second_character_advances_by_width_and_gap() {
        let font = DotMatrixFont::new();
        let m = LayoutMetrics::default();
        let one = string_to_pixels("1", &font, &m);
        let pair = string_to_pixels("11", &font, &m);
        assert_eq!(pair.len(), one.len() * 2);
        let advance = 5.0 * m.pitch + m.inter_char;
        assert_eq!(pair[one.len()].x, one[0].x + advance);
        assert_eq!(pair[one.len()].y, one[0].y);
    }

    #[test]
    fn space_advances_without_dots() {
        let font = DotMatrixFont::new();
        let m = LayoutMetrics::default();
        let with_space = string_to_pixels("1 1", &font, &m);
        let without = string_to_pixels("11", &font, &m);
        assert_eq!(with_space.len(), without.len());
        let extra = f64::from(m.space_cells) * m.pitch;
        assert_eq!(with_space[without.len() / 2].x, without[without.len() / 2].x + extra);
    }

    #[test]
    fn newline_starts_a_fresh_line() {
        let font = DotMatrixFont::new();
        let m = LayoutMetrics::default();
        let stacked = string_to_pixels("1\n1", &font, &m);
        let single = string_to_pixels("1", &font, &m);
        assert_eq!(stacked.len(), single.len() * 2);
        assert_eq!(stacked[single.len()].x, single[0].x);
        let line_advance = 7.0 * m.pitch + 2.0 * m.inter_char;
        assert_eq!(stacked[single.len()].y, single[0].y + line_advance);
    }
}
