//! Deterministic tile value generation.

use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;

use crate::grid::{Tile, SEED_VALUES};

/// Seedable generator for new tile values.
///
/// Every tile the engine creates, both when filling a fresh grid and when reseeding the cells
/// consumed by a merge, comes from this generator. Keeping the seed around lets a game be
/// replayed from the command line.
#[derive(Clone, Debug)]
pub(crate) struct TileRng {
    /// Underlying stream cipher RNG.
    inner: ChaCha8Rng,
    /// Seed the generator was created from.
    seed: u64,
}

impl TileRng {
    /// Creates a generator from a fixed seed.
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed drawn from the thread-local RNG.
    pub(crate) fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Returns the seed this generator was created from.
    pub(crate) const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one of the seed values uniformly.
    pub(crate) fn seed_value(&mut self) -> Tile {
        let index = self.inner.gen_range(0..SEED_VALUES.len());

        SEED_VALUES.get(index).copied().unwrap_or(SEED_VALUES[0])
    }
}
