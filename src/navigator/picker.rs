//! Random index selection for shuffled traversal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws an index uniformly from `0..len`.
///
/// Callers guarantee `len > 0`.
pub trait IndexPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// [`IndexPicker`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker, for reproducible shuffles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
