//! Seeded pseudo-random stream shared by every generator.
//!
//! Each generation call owns one `SeededRandom`; nothing reads ambient entropy, so a
//! fixed seed plus a fixed sequence of calls always yields the same values.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// 2^-53, the spacing of the 53-bit floats produced by [`SeededRandom::next_float`].
const FLOAT_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Restart the stream as if freshly constructed with `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * FLOAT_UNIT
    }

    /// Uniform integer in `[min, max_exclusive)`; returns `min` when the range is empty.
    pub fn range(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        self.offset_from(min, (i64::from(max_exclusive) - i64::from(min)) as u64)
    }

    /// Uniform integer in `[min, max]`; returns `min` when `max < min`.
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        self.offset_from(min, (i64::from(max) - i64::from(min) + 1) as u64)
    }

    fn offset_from(&mut self, min: i32, span: u64) -> i32 {
        let offset = self.rng.next_u64() % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// True with the given probability. `0.0` never fires, `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_float() < probability
    }
}
