//! Configuration loading for the murmur clock.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/murmur/config.toml` on Linux). Every field has a
//! default; a missing or malformed file just means defaults, never an
//! error at startup.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use murmur_core::{ColorTheme, EasingKind, InterpolationKind, MatchingKind, TimeFormat};

/// One window within the display cycle that shows a label instead of the
/// clock. The label is a chrono format string, so `"%A"` shows the weekday
/// and plain text passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseWindow {
    /// Label format string shown during the window.
    pub label: String,
    /// First second of the cycle this window covers (inclusive).
    pub from: u32,
    /// Last second of the cycle this window covers (inclusive).
    pub until: u32,
}

/// Schedule of label windows cycling over `cycle` seconds. An empty
/// schedule shows the plain clock at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseSchedule {
    /// Length of the display cycle in seconds.
    pub cycle: u32,
    /// Label windows, checked in order against `second % cycle`.
    pub windows: Vec<PhaseWindow>,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            cycle: 20,
            windows: Vec::new(),
        }
    }
}

impl PhaseSchedule {
    /// The label active at `second` of the minute, if any.
    pub fn label_at(&self, second: u32) -> Option<&str> {
        if self.cycle == 0 {
            return None;
        }
        let slot = second % self.cycle;
        self.windows
            .iter()
            .find(|w| slot >= w.from && slot <= w.until)
            .map(|w| w.label.as_str())
    }
}

/// User-tunable settings with sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock color theme.
    pub theme: ColorTheme,
    /// 12-hour or 24-hour display.
    pub time_format: TimeFormat,
    /// Easing curve for transition progress.
    pub easing: EasingKind,
    /// Path the travelling dots follow.
    pub interpolation: InterpolationKind,
    /// How leaving and arriving dots are paired.
    pub matching: MatchingKind,
    /// Optional label windows within the display cycle.
    pub phases: PhaseSchedule,
}

impl Config {
    /// Parse a TOML document, falling back to defaults on any error.
    pub fn from_toml(text: &str) -> Self {
        toml::from_str(text).unwrap_or_default()
    }
}

/// Path of the user's config file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "murmur").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the user's configuration, or defaults when absent or unreadable.
pub fn load() -> Config {
    config_path()
        .and_then(|path| fs::read_to_string(path).ok())
        .map(|text| Config::from_toml(&text))
        .unwrap_or_default()
}
