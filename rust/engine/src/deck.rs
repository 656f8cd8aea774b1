use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with a ChaCha20 source driving the shuffle.
///
/// The default constructor seeds from OS entropy so future community cards
/// cannot be predicted from observed partial information. Seeded construction
/// is available for deterministic replay in tests and simulations.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Rebuilds the canonical suit-then-rank order and rewinds the draw cursor.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Fisher-Yates permutation of all 52 cards; a shuffle starts a fresh
    /// draw sequence.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the top card, or `None` once the deck is exhausted.
    /// The fixed deal pattern never draws more than 9 cards, so an empty deck
    /// here is a programming error surfaced by the caller.
    pub fn draw(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
