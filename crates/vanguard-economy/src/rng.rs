//! Seeded random source — the one authority over non-determinism.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vanguard_core::rng::RandomSource;

/// `ChaCha8Rng`-backed source. Same seed = same reward stream.
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next01(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}
