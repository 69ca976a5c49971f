//! Seedable random source for element draws.
//!
//! Every engine owns one `GameRng`; each simulation run forks its own so
//! concurrent batches never share a generator.
//!
//! ```
//! use rpsls::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_element(), b.gen_element());
//!
//! // Forks are deterministic but diverge from the parent
//! let mut fa = a.fork();
//! let mut fb = b.fork();
//! assert_eq!(fa.gen_element(), fb.gen_element());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::element::Element;

/// Golden-ratio increment used to space fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8-backed generator with deterministic forking.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent generator.
    ///
    /// Each fork gets a distinct seed derived from the parent seed and the
    /// number of forks taken so far.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(FORK_STRIDE));
        Self::new(fork_seed)
    }

    /// Draw one element, each with probability 1/5.
    pub fn gen_element(&mut self) -> Element {
        let index = self.inner.gen_range(0..Element::COUNT);
        Element::ALL[index]
    }
}
