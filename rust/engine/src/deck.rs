use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Pool of cards not currently in the hand.
///
/// One generator lives for the whole lifetime of the deck and is advanced on
/// every draw, so a seeded deck replays the same sequence of deals across rounds.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
    seed: u64,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Self {
            cards: full_deck(),
            rng,
            seed,
        }
    }

    /// Removes and returns a card chosen uniformly among the remaining ones.
    ///
    /// # Panics
    ///
    /// Panics when the deck is empty. A five-card hand can never exhaust a
    /// 52-card deck, so reaching this is a bookkeeping bug.
    pub fn draw_random(&mut self) -> Card {
        assert!(
            !self.cards.is_empty(),
            "deck exhausted: every card is already in play"
        );
        let idx = self.rng.random_range(0..self.cards.len());
        self.cards.swap_remove(idx)
    }

    /// Refills the deck with the full master set.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
