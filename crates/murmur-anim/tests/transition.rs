//! End-to-end morph over the real bitmap font: one second ticking over.

use murmur_anim::{MatchStrategy, Morpher, ShuffleMatch};
use murmur_core::{
    EasingKind, InterpolationKind, MatchingKind, Mulberry32, Pixel, diff,
};
use murmur_fonts::{DotMatrixFont, LayoutMetrics, string_to_pixels};

#[test]
fn only_the_changed_digit_contributes_mismatches() {
    let font = DotMatrixFont::new();
    let metrics = LayoutMetrics::default();
    let current = string_to_pixels("12:00:00", &font, &metrics);
    let next = string_to_pixels("12:00:01", &font, &metrics);

    let d = diff(&current, &next);

    // Seven of the eight characters are unchanged; their dots must all be
    // classified as `same`. Only the final digit's glyph differs.
    let last_char_x = 7.0 * (5.0 * metrics.pitch + metrics.inter_char);
    for p in d.removed.iter().chain(d.added.iter()) {
        assert!(
            p.x >= last_char_x,
            "mismatched dot {p:?} left of the last digit"
        );
    }

    // '0' and '1' share some cells; the shared ones stay put.
    let zero = font_cells(&font, '0');
    let one = font_cells(&font, '1');
    let shared = zero.iter().filter(|c| one.contains(c)).count();
    let expected_same = current.len() - (zero.len() - shared);
    assert_eq!(d.same.len(), expected_same);
    assert_eq!(d.removed.len(), zero.len() - shared);
    assert_eq!(d.added.len(), one.len() - shared);
}

#[test]
fn the_scatter_pattern_repeats_for_the_same_second() {
    let font = DotMatrixFont::new();
    let metrics = LayoutMetrics::default();
    let current = string_to_pixels("12:00:00", &font, &metrics);
    let next = string_to_pixels("12:00:01", &font, &metrics);
    let d = diff(&current, &next);

    let mut rng1 = Mulberry32::from_key("12:00:00");
    let mut rng2 = Mulberry32::from_key("12:00:00");
    let out1 = ShuffleMatch.pair(d.removed.clone(), d.added.clone(), &mut rng1);
    let out2 = ShuffleMatch.pair(d.removed.clone(), d.added.clone(), &mut rng2);
    assert_eq!(out1, out2);
}

#[test]
fn a_full_transition_lands_on_the_next_second() {
    let font = DotMatrixFont::new();
    let metrics = LayoutMetrics::default();
    let current = string_to_pixels("09:59:59", &font, &metrics);
    let next = string_to_pixels("10:00:00", &font, &metrics);

    let mut morpher = Morpher::new(
        EasingKind::CubicInOut,
        MatchingKind::Centroid,
        InterpolationKind::Arc,
    );
    let frame = morpher.frame(&current, &next, "09:59:59", 1000);

    // t = 1: travellers have arrived, so fixed ∪ moving covers the next
    // second's dot set (travellers may stack when counts were unequal).
    let drawn: Vec<Pixel> = frame.fixed.iter().chain(&frame.moving).copied().collect();
    for target in &next {
        assert!(
            drawn
                .iter()
                .any(|p| (p.x - target.x).abs() < 1e-6 && (p.y - target.y).abs() < 1e-6),
            "no dot arrived at {target:?}"
        );
    }
}

fn font_cells(font: &DotMatrixFont, c: char) -> Vec<(i32, i32)> {
    use murmur_fonts::GlyphSource;
    font.glyph(c).cells.clone()
}
