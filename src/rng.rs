//! Deterministic random number generation.
//!
//! Both engines draw all randomness from a single ChaCha stream constructed
//! from the configured seed, so a fixed seed reproduces a run exactly.
//! Fork-join workers (parallel fitness evaluation, ant construction) each
//! receive a child seed drawn from the master stream, which keeps parallel
//! runs deterministic as well.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a seeded RNG.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws `count` child seeds from a master RNG, one per parallel worker.
pub fn spawn_seeds<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random::<u64>()).collect()
}
