//! Seedable random source for particle placement and recoloring.
//!
//! Production hosts seed from entropy; tests use a fixed seed so that the
//! same seed always yields the same pool and the same recolors.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 0xA07A;

/// Per-engine RNG. Use `rng.0` wherever a `rand::Rng` is expected.
#[derive(Clone, Debug)]
pub struct AuraRng(pub ChaCha8Rng);

impl Default for AuraRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl AuraRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from the OS (or `crypto.getRandomValues` in the browser).
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}
