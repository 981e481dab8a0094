//! Easing curves that remap linear time progress.

use murmur_core::EasingKind;

/// Remap raw progress `t` in `[0, 1]` through the selected easing curve.
pub fn ease(kind: EasingKind, t: f64) -> f64 {
    match kind {
        EasingKind::CubicInOut => ease_in_out_cubic(t),
        EasingKind::OutBack => ease_out_back(t),
    }
}

/// Cubic ease-in-out: `4t³` below the midpoint, mirrored cubic above.
fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Cubic back-ease: overshoots past 1 before settling. Output may leave
/// `[0, 1]` transiently; the endpoints are still exact.
fn ease_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}
