//! Deterministic scenario RNG.
//!
//! # Determinism strategy
//!
//! Every random decision in scenario generation draws from one `SmallRng`
//! seeded from `ScenarioConfig::seed`.  The same seed and the same config
//! always produce the same map, which is what makes planner comparisons and
//! tests reproducible.
//!
//! `ScenarioRng` implements [`RngCore`], so it can be passed anywhere a
//! generic `R: Rng` is accepted.  Tests may inject any other `Rng` instead.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded RNG for scenario generation.  Single-threaded use only.
pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl RngCore for ScenarioRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
