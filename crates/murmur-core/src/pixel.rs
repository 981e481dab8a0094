//! Pixel coordinates and exact-equality set algebra.
//!
//! A [`Pixel`] is the center of one rendered dot. Coordinates are always
//! derived from integer glyph-cell indices and integer layout constants, so
//! two dots occupying the same grid cell compare exactly equal; no tolerance
//! is involved anywhere in the diff.

use std::cmp::Ordering;

/// Center of one rendered dot in glyph layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Horizontal coordinate, growing rightward.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Pixel {
    /// Construct a pixel from its center coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Total order on (x, y), x first. Used for the diff's merge-join.
    pub fn grid_cmp(&self, other: &Pixel) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Squared Euclidean distance to another point.
    pub fn dist_sq(&self, other: &Pixel) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Partition of two pixel sets into unchanged, leaving, and arriving dots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelDiff {
    /// Dots present in both sets; drawn statically.
    pub same: Vec<Pixel>,
    /// Dots only in the current set; they animate away.
    pub removed: Vec<Pixel>,
    /// Dots only in the next set; they animate in.
    pub added: Vec<Pixel>,
}

/// Partition `current` and `next` into `same` / `removed` / `added`.
///
/// Both inputs are sorted by [`Pixel::grid_cmp`] and merge-joined, so the
/// whole diff is O(n log n). Duplicate coordinates within one set are kept
/// as distinct entries and matched pairwise in sorted order.
pub fn diff(current: &[Pixel], next: &[Pixel]) -> PixelDiff {
    let mut a = current.to_vec();
    let mut b = next.to_vec();
    a.sort_by(Pixel::grid_cmp);
    b.sort_by(Pixel::grid_cmp);

    let mut out = PixelDiff::default();
    let mut ai = 0;
    let mut bi = 0;
    while ai < a.len() && bi < b.len() {
        match a[ai].grid_cmp(&b[bi]) {
            Ordering::Equal => {
                out.same.push(a[ai]);
                ai += 1;
                bi += 1;
            }
            Ordering::Less => {
                out.removed.push(a[ai]);
                ai += 1;
            }
            Ordering::Greater => {
                out.added.push(b[bi]);
                bi += 1;
            }
        }
    }
    out.removed.extend_from_slice(&a[ai..]);
    out.added.extend_from_slice(&b[bi..]);
    out
}
