//! Random sources for door placement and host reveals.
//!
//! ## Key Features
//!
//! - **Injectable**: `Game` never reaches for ambient randomness; every
//!   random draw goes through a [`RandomSource`].
//! - **Deterministic**: [`GameRng`] produces the same sequence for the same seed.
//! - **Forkable**: independent streams for parallel simulation runs.
//! - **Scriptable**: [`SequenceSource`] replays fixed draws in tests.
//!
//! ```
//! use monty_hall::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut twin = GameRng::new(42);
//! assert_eq!(rng.next_index(3), twin.next_index(3));
//!
//! // Forks are deterministic too
//! let mut forked = rng.fork();
//! let mut twin_forked = twin.fork();
//! assert_eq!(forked.next_index(3), twin_forked.next_index(3));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer source over `0..bound`.
///
/// Implementations must return a value strictly below `bound`.
/// Callers never pass a zero bound.
pub trait RandomSource {
    /// Draw a uniform index in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Draw a fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_index(2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }

    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

impl RandomSource for rand::rngs::ThreadRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Draw from `rng` and fold the result into `0..bound`.
///
/// Guards game invariants against sources that break the
/// [`RandomSource`] contract.
pub(crate) fn draw_index<R: RandomSource + ?Sized>(rng: &mut R, bound: usize) -> usize {
    rng.next_index(bound) % bound
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script of
/// `[2, 0]` yields index 2 for a three-way draw and index 0 for a
/// two-way draw.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source replaying `values`.
    ///
    /// An empty script always yields zero.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
