//! Injectable randomness for the opponent fallback and promo codes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniformly distributed indices.
///
/// The controller draws from it for the opponent's fallback move and for
/// promo codes; tests swap in [`ScriptedRandom`] to pin both down.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;
}

/// Production random source backed by a small fast RNG.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: SmallRng,
}

impl ThreadRandom {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each draw is reduced modulo the requested bound. Once the script runs
/// out every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.values.pop_front().map_or(0, |v| v % bound)
    }
}
