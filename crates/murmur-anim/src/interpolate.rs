//! Interpolation paths between matched dot pairs.
//!
//! The default path treats the pair as two points on a circle centered at
//! their midpoint and sweeps half a revolution, which gives the morph its
//! swirling look. Strategies take `&mut self` because the tick-tock
//! composite keeps a cursor across transitions; the simple paths are
//! stateless.

use std::f64::consts::PI;

use murmur_core::{InterpolationKind, Pixel};

/// Computes the animated position of one matched pair at progress `t`.
///
/// Implementations must return `start` at `t = 0` and `end` at `t = 1`.
pub trait Interpolator {
    /// Position of the dot that travels from `start` to `end`.
    fn at(&mut self, start: Pixel, end: Pixel, t: f64) -> Pixel;
}

/// Build the configured interpolator.
pub fn interpolator_for(kind: InterpolationKind) -> Box<dyn Interpolator> {
    match kind {
        InterpolationKind::Arc => Box::new(Arc::forward()),
        InterpolationKind::ArcReverse => Box::new(Arc::reverse()),
        InterpolationKind::Linear => Box::new(Linear),
        InterpolationKind::TickTock => Box::new(TickTock::arcs()),
    }
}

/// Half-circle sweep through the pair's midpoint-centered circle.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    /// Sweep clockwise instead of counter-clockwise.
    pub reverse: bool,
}

impl Arc {
    /// Arc swept in the positive angular direction.
    pub fn forward() -> Self {
        Self { reverse: false }
    }

    /// Arc swept in the opposite direction.
    pub fn reverse() -> Self {
        Self { reverse: true }
    }
}

impl Interpolator for Arc {
    fn at(&mut self, start: Pixel, end: Pixel, t: f64) -> Pixel {
        let cx = (start.x + end.x) / 2.0;
        let cy = (start.y + end.y) / 2.0;
        let dx = start.x - cx;
        let dy = start.y - cy;
        let r = (dx * dx + dy * dy).sqrt();
        // Coincident endpoints have no circle; atan2(0, 0) would still give
        // an angle but the radius is zero, so short-circuit.
        if r == 0.0 {
            return start;
        }
        let sweep = if self.reverse { -t } else { t };
        let angle = sweep * PI + dy.atan2(dx);
        Pixel::new(cx + angle.cos() * r, cy + angle.sin() * r)
    }
}

/// Straight-line travel between the endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl Interpolator for Linear {
    fn at(&mut self, start: Pixel, end: Pixel, t: f64) -> Pixel {
        Pixel::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        )
    }
}

/// Cycles through a fixed list of interpolators, advancing whenever a new
/// transition begins. A transition boundary is observed as `t` decreasing
/// relative to the previous call.
pub struct TickTock {
    strategies: Vec<Box<dyn Interpolator>>,
    active: usize,
    last_t: f64,
}

impl TickTock {
    /// Cycle through the given strategies, starting with the first.
    pub fn new(strategies: Vec<Box<dyn Interpolator>>) -> Self {
        Self {
            strategies,
            active: 0,
            last_t: 0.0,
        }
    }

    /// The classic pairing: forward arc one second, reverse arc the next.
    pub fn arcs() -> Self {
        Self::new(vec![Box::new(Arc::forward()), Box::new(Arc::reverse())])
    }

    /// Index of the currently active sub-strategy.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Record a progress observation, advancing the cursor if `t` went
    /// backwards (the start of a new transition).
    pub fn observe(&mut self, t: f64) {
        if t < self.last_t && !self.strategies.is_empty() {
            self.active = (self.active + 1) % self.strategies.len();
        }
        self.last_t = t;
    }
}

impl Interpolator for TickTock {
    fn at(&mut self, start: Pixel, end: Pixel, t: f64) -> Pixel {
        self.observe(t);
        match self.strategies.get_mut(self.active) {
            Some(inner) => inner.at(start, end, t),
            None => start,
        }
    }
}
