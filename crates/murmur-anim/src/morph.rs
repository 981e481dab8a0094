//! Per-frame composition of the morph pipeline.

use murmur_core::{EasingKind, InterpolationKind, MatchingKind, Mulberry32, Pixel, diff};

use crate::easing::ease;
use crate::interpolate::{Interpolator, interpolator_for};
use crate::matching::{MatchStrategy, matcher_for};

/// Fraction of each second held at `t = 0` so the digits stay legible
/// before the scatter begins.
const HOLD_FRACTION: f64 = 0.1;

/// Raw transition progress for the given sub-second offset.
///
/// The first 10% of the second is held at 0; the remainder maps linearly
/// onto `[0, 1]`, clamped.
pub fn progress(subsec_ms: u32) -> f64 {
    let t = (f64::from(subsec_ms) / 1000.0 - HOLD_FRACTION) / (1.0 - HOLD_FRACTION);
    t.clamp(0.0, 1.0)
}

/// One frame's worth of dots to draw.
#[derive(Debug, Clone, Default)]
pub struct MorphFrame {
    /// Dots common to both seconds; drawn in place.
    pub fixed: Vec<Pixel>,
    /// Dots in flight between their paired endpoints.
    pub moving: Vec<Pixel>,
}

/// Owns the configured strategies and turns a pair of dot sets plus a
/// wall-clock offset into one frame of the morph.
///
/// The only state carried across frames is the tick-tock interpolator's
/// cursor; everything else is recomputed from the inputs, so identical
/// inputs always produce identical frames.
pub struct Morpher {
    easing: EasingKind,
    matcher: Box<dyn MatchStrategy>,
    interpolator: Box<dyn Interpolator>,
}

impl Morpher {
    /// Build a morpher from the configured strategy selections.
    pub fn new(easing: EasingKind, matching: MatchingKind, interpolation: InterpolationKind) -> Self {
        Self {
            easing,
            matcher: matcher_for(matching),
            interpolator: interpolator_for(interpolation),
        }
    }

    /// Swap the easing curve.
    pub fn set_easing(&mut self, easing: EasingKind) {
        self.easing = easing;
    }

    /// Swap the matching strategy.
    pub fn set_matching(&mut self, matching: MatchingKind) {
        self.matcher = matcher_for(matching);
    }

    /// Swap the interpolation path, resetting any cross-transition cursor.
    pub fn set_interpolation(&mut self, interpolation: InterpolationKind) {
        self.interpolator = interpolator_for(interpolation);
    }

    /// Compute one frame of the transition from `current` to `next`.
    ///
    /// `seed_key` is the current second's display string; it fixes the
    /// shuffle so the same wall-clock second always scatters identically.
    /// `subsec_ms` is the elapsed milliseconds within the current second.
    pub fn frame(
        &mut self,
        current: &[Pixel],
        next: &[Pixel],
        seed_key: &str,
        subsec_ms: u32,
    ) -> MorphFrame {
        let t = ease(self.easing, progress(subsec_ms));
        let d = diff(current, next);
        let mut rng = Mulberry32::from_key(seed_key);
        let (starts, ends) = self.matcher.pair(d.removed, d.added, &mut rng);
        let moving = starts
            .iter()
            .zip(&ends)
            .map(|(s, e)| self.interpolator.at(*s, *e, t))
            .collect();
        MorphFrame {
            fixed: d.same,
            moving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> Pixel {
        Pixel::new(x as f64, y as f64)
    }

    #[test]
    fn progress_holds_then_ramps() {
        assert_eq!(progress(0), 0.0);
        assert_eq!(progress(50), 0.0);
        assert_eq!(progress(100), 0.0);
        assert!((progress(550) - 0.5).abs() < 1e-12);
        assert_eq!(progress(1000), 1.0);
    }

    #[test]
    fn progress_is_monotonic_within_a_second() {
        let mut prev = 0.0;
        for ms in (0..1000).step_by(10) {
            let t = progress(ms);
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn held_phase_draws_the_current_set_exactly() {
        let current = vec![px(0, 0), px(7, 0), px(14, 7)];
        let next = vec![px(0, 0), px(21, 7)];
        let mut morpher = Morpher::new(
            EasingKind::CubicInOut,
            MatchingKind::Centroid,
            InterpolationKind::Arc,
        );
        let frame = morpher.frame(&current, &next, "12:00:00", 50);

        // t = 0: every traveller still sits on its start point, so the
        // union of fixed and moving dots is exactly the current set.
        let mut drawn: Vec<Pixel> = frame.fixed.iter().chain(&frame.moving).copied().collect();
        drawn.sort_by(Pixel::grid_cmp);
        let mut expected = current.clone();
        expected.sort_by(Pixel::grid_cmp);
        for (d, e) in drawn.iter().zip(&expected) {
            assert!((d.x - e.x).abs() < 1e-9 && (d.y - e.y).abs() < 1e-9);
        }
        assert_eq!(drawn.len(), expected.len());
    }

    #[test]
    fn identical_inputs_produce_identical_frames() {
        let current: Vec<Pixel> = (0..20).map(|i| px(i * 7, (i % 5) * 7)).collect();
        let next: Vec<Pixel> = (0..15).map(|i| px(i * 7 + 3, (i % 4) * 7)).collect();
        let mut m1 = Morpher::new(
            EasingKind::CubicInOut,
            MatchingKind::Centroid,
            InterpolationKind::Arc,
        );
        let mut m2 = Morpher::new(
            EasingKind::CubicInOut,
            MatchingKind::Centroid,
            InterpolationKind::Arc,
        );
        let f1 = m1.frame(&current, &next, "08:15:30", 400);
        let f2 = m2.frame(&current, &next, "08:15:30", 400);
        assert_eq!(f1.fixed, f2.fixed);
        assert_eq!(f1.moving, f2.moving);
    }

    #[test]
    fn equal_sets_have_nothing_in_flight() {
        let set = vec![px(0, 0), px(7, 7)];
        let mut morpher = Morpher::new(
            EasingKind::CubicInOut,
            MatchingKind::Centroid,
            InterpolationKind::Arc,
        );
        let frame = morpher.frame(&set, &set, "12:00:05", 500);
        assert!(frame.moving.is_empty());
        assert_eq!(frame.fixed.len(), set.len());
    }
}
