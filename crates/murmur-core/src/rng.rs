//! Deterministic string-seeded randomness.
//!
//! The scatter pattern of every transition is keyed off the displayed time
//! string, so revisiting the same wall-clock second replays the same motion.
//! Seeding is two-stage: an order-sensitive avalanche hash of the string
//! (xmur3) produces a 32-bit seed, which drives a fast mulberry32 generator.
//! Neither is cryptographic; the only property that matters is that the same
//! string yields the same sequence on every run and platform.

/// Hash a string key into a 32-bit PRNG seed (xmur3, one finalization round).
pub fn seed_from_str(key: &str) -> u32 {
    let mut h: u32 = 1779033703 ^ key.len() as u32;
    for b in key.bytes() {
        h = (h ^ u32::from(b)).wrapping_mul(3432918353);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(2246822507);
    h = (h ^ (h >> 13)).wrapping_mul(3266489909);
    h ^ (h >> 16)
}

/// Mulberry32: a 32-bit multiplicative PRNG with a single word of state.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Start the generator from a raw 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Start the generator from a string key via [`seed_from_str`].
    pub fn from_key(key: &str) -> Self {
        Self::new(seed_from_str(key))
    }

    /// Advance the state and return the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next output scaled to a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4294967296.0
    }
}
