//! Pairing of leaving and arriving dots.
//!
//! Matching turns the diff's `removed` and `added` buckets into two lists of
//! equal length so position `i` of each forms one animated pair. When the
//! digit shapes have different dot counts the shorter side is cyclically
//! replicated, so a single dot may be the endpoint of several simultaneous
//! travellers (a "1" morphing into an "8" fans out).

use murmur_core::{MatchingKind, Mulberry32, Pixel};

/// Pairs mismatched dots for one transition.
///
/// Implementations must return lists of equal length: the maximum of the two
/// input lengths, or zero when both inputs are empty.
pub trait MatchStrategy {
    /// Produce positionally-paired `(start, end)` lists.
    fn pair(
        &self,
        removed: Vec<Pixel>,
        added: Vec<Pixel>,
        rng: &mut Mulberry32,
    ) -> (Vec<Pixel>, Vec<Pixel>);
}

/// Build the configured matching strategy.
pub fn matcher_for(kind: MatchingKind) -> Box<dyn MatchStrategy> {
    match kind {
        MatchingKind::Centroid => Box::new(CentroidMatch),
        MatchingKind::Shuffle => Box::new(ShuffleMatch),
    }
}

/// Repeat the list's elements from the start until it reaches `len`.
fn replicate_cyclic(points: &mut Vec<Pixel>, len: usize) {
    if points.is_empty() {
        return;
    }
    let mut i = 0;
    while points.len() < len {
        points.push(points[i]);
        i += 1;
    }
}

/// In-place Fisher–Yates shuffle driven by the seeded generator, walking
/// from the end down to index 1.
fn shuffle(points: &mut [Pixel], rng: &mut Mulberry32) {
    for i in (1..points.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        points.swap(i, j);
    }
}

/// Balance lengths by cyclic replication, then shuffle both sides.
fn balance_and_shuffle(
    mut removed: Vec<Pixel>,
    mut added: Vec<Pixel>,
    rng: &mut Mulberry32,
) -> (Vec<Pixel>, Vec<Pixel>) {
    let len = removed.len().max(added.len());
    replicate_cyclic(&mut removed, len);
    replicate_cyclic(&mut added, len);
    shuffle(&mut removed, rng);
    shuffle(&mut added, rng);
    (removed, added)
}

/// Pure shuffle pairing: balanced lengths, random positional pairs.
#[derive(Debug, Clone, Copy)]
pub struct ShuffleMatch;

impl MatchStrategy for ShuffleMatch {
    fn pair(
        &self,
        removed: Vec<Pixel>,
        added: Vec<Pixel>,
        rng: &mut Mulberry32,
    ) -> (Vec<Pixel>, Vec<Pixel>) {
        balance_and_shuffle(removed, added, rng)
    }
}

/// Shuffle, then order both sides by distance from their shared centroid:
/// removed ascending, added descending. Near-center leavers pair with
/// far-out arrivals, so the cloud sweeps outward and contracts back in.
#[derive(Debug, Clone, Copy)]
pub struct CentroidMatch;

impl MatchStrategy for CentroidMatch {
    fn pair(
        &self,
        removed: Vec<Pixel>,
        added: Vec<Pixel>,
        rng: &mut Mulberry32,
    ) -> (Vec<Pixel>, Vec<Pixel>) {
        let (mut removed, mut added) = balance_and_shuffle(removed, added, rng);
        let total = removed.len() + added.len();
        if total == 0 {
            return (removed, added);
        }
        let sum = removed
            .iter()
            .chain(added.iter())
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let centroid = Pixel::new(sum.0 / total as f64, sum.1 / total as f64);
        removed.sort_by(|a, b| a.dist_sq(&centroid).total_cmp(&b.dist_sq(&centroid)));
        added.sort_by(|a, b| b.dist_sq(&centroid).total_cmp(&a.dist_sq(&centroid)));
        (removed, added)
    }
}
