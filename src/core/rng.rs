//! Seeded randomness for dice, seating and the opening player.
//!
//! A match driven by the same seed throws the same dice in the same order.
//! A reloaded match does not continue the exact stream it was saved from;
//! it resumes from the stored seed skipped ahead by the number of plays, so
//! loading the same record always yields the same throws.
//!
//! ```
//! use parques::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! for _ in 0..20 {
//!     let roll = a.roll_die();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, b.roll_die());
//! }
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::group::{Group, GROUP_COUNT};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// ChaCha8 stream owned by one match session.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Stream for a reloaded match: `seed`, skipped ahead one throw per
    /// logged play.
    #[must_use]
    pub fn resume(seed: u64, plays: usize) -> Self {
        let mut rng = Self::new(seed);
        for _ in 0..plays {
            rng.roll_die();
        }
        rng
    }

    /// Seed the stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One throw of the die, `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Draw the opening group.
    pub fn choose_group(&mut self) -> Group {
        Group::ALL[self.inner.gen_range(0..GROUP_COUNT)]
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
