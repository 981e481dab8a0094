//! Core types and pure algorithms for the murmur clock.
//!
//! Everything in this crate is synchronous and free of terminal concerns:
//! pixel coordinates and their exact-equality set algebra, the string-seeded
//! random number generator that makes each second's scatter pattern
//! repeatable, and the small enums shared between the animation pipeline and
//! the configuration layer.

mod pixel;
mod rng;

pub use pixel::{Pixel, PixelDiff, diff};
pub use rng::{Mulberry32, seed_from_str};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Time format for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
        }
    }
}

/// Color theme for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }
}

/// Which easing curve remaps raw time progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    /// Cubic ease-in-out: slow start, fast middle, slow landing.
    #[default]
    CubicInOut,
    /// Cubic back-ease: overshoots the target before settling.
    OutBack,
}

impl EasingKind {
    /// Cycle to the next easing curve.
    pub fn next(self) -> Self {
        match self {
            EasingKind::CubicInOut => EasingKind::OutBack,
            EasingKind::OutBack => EasingKind::CubicInOut,
        }
    }
}

/// Which path a moving dot follows between its paired endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationKind {
    /// Half-circle arc through the pair's midpoint-centered circle.
    #[default]
    Arc,
    /// Same arc, swept in the opposite rotational direction.
    ArcReverse,
    /// Straight line between the endpoints.
    Linear,
    /// Alternate arc direction on every new transition.
    TickTock,
}

impl InterpolationKind {
    /// Cycle to the next interpolation style.
    pub fn next(self) -> Self {
        match self {
            InterpolationKind::Arc => InterpolationKind::ArcReverse,
            InterpolationKind::ArcReverse => InterpolationKind::Linear,
            InterpolationKind::Linear => InterpolationKind::TickTock,
            InterpolationKind::TickTock => InterpolationKind::Arc,
        }
    }
}

/// How mismatched pixels from the old and new digits are paired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchingKind {
    /// Shuffle both sides, then order by distance from the shared centroid
    /// so the cloud scatters outward and reassembles inward.
    #[default]
    Centroid,
    /// Shuffle both sides and pair positionally, no distance ordering.
    Shuffle,
}

impl MatchingKind {
    /// Cycle to the next matching strategy.
    pub fn next(self) -> Self {
        match self {
            MatchingKind::Centroid => MatchingKind::Shuffle,
            MatchingKind::Shuffle => MatchingKind::Centroid,
        }
    }
}
