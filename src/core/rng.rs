//! Deterministic random number generation.
//!
//! Every random decision in a match (dealing, master-rank rerolls, life
//! rolls, AI accusations) goes through a [`GameRng`], so a match is fully
//! reproducible from its seed.
//!
//! ## Streams
//!
//! Components get their own stream instead of sharing one:
//!
//! ```
//! use menteur::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // The dealer's stream does not shift when an AI draws more numbers.
//! let mut deal = rng.for_context("deal");
//! let mut ai = rng.for_context("ai");
//!
//! let _ = ai.roll(0..=6);
//! let first_deal = deal.gen_index(20);
//!
//! let mut deal_again = GameRng::new(42).for_context("deal");
//! assert_eq!(first_deal, deal_again.gen_index(20));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with forking and named streams.
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

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream.
    ///
    /// Each fork gets a different but deterministic seed. Used to hand every
    /// AI seat its own generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Derive a named stream from this RNG's seed.
    ///
    /// The same context always yields the same stream for the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in an inclusive range.
    pub fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniform index in `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
