use std::collections::BTreeMap;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, Rank, NUM_RANKS};

/// Number of standard 52-card decks in the shoe.
pub const DECKS: u32 = 8;

/// Each deck holds four cards of every rank, so a rank can be drawn 8 x 4 times.
pub const MAX_DRAWS_PER_RANK: u32 = DECKS * 4;

/// Total number of cards in a full shoe (8 x 52).
pub const SHOE_SIZE: u32 = DECKS * 52;

/// A supply of cards for the hand resolver.
///
/// [`Shoe`] is the production source; tests can script exact card sequences by
/// implementing this trait on their own types.
pub trait CardSource {
    fn draw(&mut self) -> Rank;

    /// Number of automatic reshuffles performed so far.
    fn reshuffles(&self) -> u32 {
        0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SeedOrigin {
    Entropy,
    Fixed,
}

/// Eight-deck baccarat shoe that tracks how often each rank has been drawn.
///
/// Draws pick a rank uniformly at random. When the chosen rank has hit its cap of
/// [`MAX_DRAWS_PER_RANK`], the following ranks are probed in order (wrapping
/// around) until one with cards left is found. Once all [`SHOE_SIZE`] cards are
/// out, the next draw resets the shoe first.
///
/// # Examples
///
/// ```
/// use baccarat_engine::shoe::{Shoe, SHOE_SIZE};
///
/// let mut shoe = Shoe::new_with_seed(7);
/// let rank = shoe.draw();
/// assert_eq!(shoe.total_drawn(), 1);
/// assert_eq!(shoe.drawn_counts()[&rank], 1);
/// assert_eq!(shoe.remaining(), SHOE_SIZE - 1);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    drawn: [u32; NUM_RANKS],
    total_drawn: u32,
    rng: ChaCha20Rng,
    origin: SeedOrigin,
    reshuffles: u32,
}

impl Shoe {
    /// Creates a shoe seeded from fresh entropy.
    pub fn new() -> Self {
        Self::with_origin(rand::random(), SeedOrigin::Entropy)
    }

    /// Creates a shoe whose draws are fully determined by `seed`, including the
    /// draws that follow any later reset.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_origin(seed, SeedOrigin::Fixed)
    }

    fn with_origin(seed: u64, origin: SeedOrigin) -> Self {
        Self {
            drawn: [0; NUM_RANKS],
            total_drawn: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            origin,
            reshuffles: 0,
        }
    }

    pub fn draw(&mut self) -> Rank {
        if self.total_drawn >= SHOE_SIZE {
            tracing::info!(
                reshuffles = self.reshuffles + 1,
                "all cards have been drawn from the shoe, resetting"
            );
            self.reshuffles += 1;
            self.reset();
        }

        let start = self.rng.random_range(0..NUM_RANKS);
        for offset in 0..NUM_RANKS {
            let i = (start + offset) % NUM_RANKS;
            if self.drawn[i] < MAX_DRAWS_PER_RANK {
                self.drawn[i] += 1;
                self.total_drawn += 1;
                return all_ranks()[i];
            }
        }

        // Only a full shoe can have every rank capped, and that case was reset above.
        tracing::error!(
            total_drawn = self.total_drawn,
            drawn = ?self.drawn,
            "every rank is capped before the shoe is exhausted"
        );
        panic!(
            "shoe invariant violated: all ranks capped with {} of {} cards drawn",
            self.total_drawn, SHOE_SIZE
        );
    }

    /// Puts every card back and reseeds the generator.
    pub fn reset(&mut self) {
        let seed = self.next_seed();
        self.drawn = [0; NUM_RANKS];
        self.total_drawn = 0;
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        tracing::debug!("shoe reset");
    }

    fn next_seed(&mut self) -> u64 {
        match self.origin {
            SeedOrigin::Entropy => rand::random(),
            SeedOrigin::Fixed => self.rng.next_u64(),
        }
    }

    /// Snapshot of how many times each rank has been drawn since the last reset.
    pub fn drawn_counts(&self) -> BTreeMap<Rank, u32> {
        all_ranks()
            .iter()
            .map(|&r| (r, self.drawn[r.index()]))
            .collect()
    }

    pub fn drawn_count(&self, rank: Rank) -> u32 {
        self.drawn[rank.index()]
    }

    pub fn total_drawn(&self) -> u32 {
        self.total_drawn
    }

    pub fn remaining(&self) -> u32 {
        SHOE_SIZE - self.total_drawn
    }

    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Rank {
        Shoe::draw(self)
    }

    fn reshuffles(&self) -> u32 {
        Shoe::reshuffles(self)
    }
}
