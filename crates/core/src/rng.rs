//! RNG module - injectable randomness for piece spawning
//!
//! Spawning draws three values per piece: column, color index and the index
//! of the empty window cell. [`RandomSource`] is the seam between the game and
//! wherever those draws come from:
//!
//! - [`StdRng`] from `rand`, OS-seeded or seeded for reproducible games
//! - [`SequenceRng`], which replays fixed draws for tests and replays

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl RandomSource for StdRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_below bound must be non-zero");
        self.random_range(0..bound.max(1))
    }
}

/// Seeded standard generator (same seed, same game)
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Standard generator seeded from the operating system
pub fn from_entropy() -> StdRng {
    StdRng::from_os_rng()
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound, so a script can be
/// written directly in terms of the wanted values.
///
/// ```
/// use mintris_core::rng::{RandomSource, SequenceRng};
///
/// let mut rng = SequenceRng::new([4, 0, 0]);
/// assert_eq!(rng.next_below(9), 4);
/// assert_eq!(rng.next_below(3), 0);
/// assert_eq!(rng.next_below(4), 0);
/// assert_eq!(rng.next_below(9), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRng {
    draws: VecDeque<u32>,
}

impl SequenceRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        let mut draws: VecDeque<u32> = draws.into_iter().collect();
        if draws.is_empty() {
            draws.push_back(0);
        }
        Self { draws }
    }

    /// Number of scripted draws
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let bound = bound.max(1);
        match self.draws.pop_front() {
            Some(v) => {
                self.draws.push_back(v);
                v % bound
            }
            None => 0,
        }
    }
}
