//! Baseline hold strategies.
//!
//! Rule-based and deterministic; meant as a reference point for simulations
//! rather than as optimal play.

use crate::HoldStrategy;
use drawpoker_engine::cards::Card;
use drawpoker_engine::eval::{classify, rank_counts, HandRank};
use drawpoker_engine::hand::HAND_SIZE;

/// Keeps the cards that already pay and draws to the rest.
///
/// # Strategy
///
/// - Straights, flushes, full houses and better: hold all five
/// - Quads, trips, two pair, high pair: hold the matched cards only
/// - Low pair: hold it as the cheapest draw to trips or two pair
/// - Anything else: draw five new cards
///
/// # Example
///
/// ```rust
/// use drawpoker_ai::baseline::PayingHoldStrategy;
/// use drawpoker_ai::HoldStrategy;
/// use drawpoker_engine::cards::{Card, Rank, Suit};
///
/// let s = PayingHoldStrategy::new();
/// let hand = [
///     Card::new(Rank::Queen, Suit::Spades),
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Queen, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Diamonds),
/// ];
/// assert_eq!(s.choose_holds(&hand), [true, false, true, false, false]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayingHoldStrategy;

impl PayingHoldStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Flags every card whose rank appears at least twice.
    fn matched_cards(cards: &[Card; HAND_SIZE]) -> [bool; HAND_SIZE] {
        let counts = rank_counts(cards);
        cards.map(|c| counts[c.rank.value() as usize] >= 2)
    }
}

impl HoldStrategy for PayingHoldStrategy {
    fn choose_holds(&self, cards: &[Card; HAND_SIZE]) -> [bool; HAND_SIZE] {
        match classify(cards) {
            HandRank::RoyalFlush
            | HandRank::StraightFlush
            | HandRank::FullHouse
            | HandRank::Flush
            | HandRank::Straight => [true; HAND_SIZE],
            HandRank::FourOfAKind
            | HandRank::ThreeOfAKind
            | HandRank::TwoPair
            | HandRank::JacksOrBetter
            | HandRank::Nothing => Self::matched_cards(cards),
        }
    }

    fn name(&self) -> &str {
        "paying"
    }
}

/// Never holds anything.
#[derive(Debug, Clone, Default)]
pub struct DiscardAll;

impl HoldStrategy for DiscardAll {
    fn choose_holds(&self, _cards: &[Card; HAND_SIZE]) -> [bool; HAND_SIZE] {
        [false; HAND_SIZE]
    }

    fn name(&self) -> &str {
        "discard"
    }
}
