use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;

/// Number of positions on a draw-poker hand.
pub const HAND_SIZE: usize = 5;

/// State of one hand position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Slot {
    /// No card; shown face down by the presentation layer
    #[default]
    Empty,
    /// Dealt card that will be replaced on the draw unless held
    Filled(Card),
    /// Card kept by the player through the draw
    Held(Card),
}

impl Slot {
    pub fn card(&self) -> Option<Card> {
        match *self {
            Slot::Empty => None,
            Slot::Filled(c) | Slot::Held(c) => Some(c),
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self, Slot::Held(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Five positional slots. A card never moves to another position: a redraw
/// only fills the slots that were emptied.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Hand {
    slots: [Slot; HAND_SIZE],
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every empty slot with a card drawn from `deck`, leaving filled and
    /// held slots untouched. Returns the complete hand in position order.
    pub fn deal(&mut self, deck: &mut Deck) -> [Card; HAND_SIZE] {
        self.slots.each_mut().map(|slot| match *slot {
            Slot::Empty => {
                let c = deck.draw_random();
                *slot = Slot::Filled(c);
                c
            }
            Slot::Filled(c) | Slot::Held(c) => c,
        })
    }

    /// Marks flagged cards as held and empties every unflagged position.
    ///
    /// Discarded cards are returned for bookkeeping; they do not go back to the
    /// deck during the round.
    pub fn apply_holds(&mut self, holds: [bool; HAND_SIZE]) -> Vec<Card> {
        let mut discarded = Vec::new();
        for (slot, keep) in self.slots.iter_mut().zip(holds) {
            *slot = match (*slot, keep) {
                (Slot::Filled(c), true) | (Slot::Held(c), true) => Slot::Held(c),
                (Slot::Filled(c), false) | (Slot::Held(c), false) => {
                    discarded.push(c);
                    Slot::Empty
                }
                (Slot::Empty, _) => Slot::Empty,
            };
        }
        discarded
    }

    pub fn reset_all(&mut self) {
        self.slots = [Slot::Empty; HAND_SIZE];
    }

    /// Displayable view of the hand: `None` for empty positions.
    pub fn snapshot(&self) -> [Option<Card>; HAND_SIZE] {
        self.slots.map(|s| s.card())
    }

    pub fn slots(&self) -> &[Slot; HAND_SIZE] {
        &self.slots
    }

    /// The five cards in position order, or `None` while any slot is empty.
    pub fn cards(&self) -> Option<[Card; HAND_SIZE]> {
        let mut out = [Card::new(Rank::Two, Suit::Hearts); HAND_SIZE];
        for (dst, slot) in out.iter_mut().zip(&self.slots) {
            *dst = slot.card()?;
        }
        Some(out)
    }

    /// Count of slots holding a card.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }
}
