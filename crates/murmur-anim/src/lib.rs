//! Scatter/reassemble morph pipeline for the murmur clock.
//!
//! Every animation frame the pipeline diffs the current and next second's
//! dot sets, pairs up the mismatched dots with a deterministic per-second
//! shuffle, and moves each pair along an eased interpolation path. The
//! easing curve, interpolation path, and matching strategy are all
//! pluggable and selected by configuration.

mod easing;
mod interpolate;
mod matching;
mod morph;

pub use easing::ease;
pub use interpolate::{Arc, Interpolator, Linear, TickTock, interpolator_for};
pub use matching::{CentroidMatch, MatchStrategy, ShuffleMatch, matcher_for};
pub use morph::{MorphFrame, Morpher, progress};
