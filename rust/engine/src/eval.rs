use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::hand::HAND_SIZE;

/// Outcome of a five-card draw-poker hand, ascending.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    Nothing = 0,
    JacksOrBetter = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    /// Every rank from lowest to highest.
    pub const ALL: [HandRank; 10] = [
        HandRank::Nothing,
        HandRank::JacksOrBetter,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    /// Machine display label; blank for a losing hand.
    pub fn label(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "ROYAL FLUSH",
            HandRank::StraightFlush => "STRAIGHT FLUSH",
            HandRank::FourOfAKind => "FOUR OF A KIND",
            HandRank::FullHouse => "FULL HOUSE",
            HandRank::Flush => "FLUSH",
            HandRank::Straight => "STRAIGHT",
            HandRank::ThreeOfAKind => "THREE OF A KIND",
            HandRank::TwoPair => "TWO PAIRS",
            HandRank::JacksOrBetter => "JACKS OR BETTER",
            HandRank::Nothing => "",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::JacksOrBetter => "Jacks or Better",
            HandRank::Nothing => "Nothing",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies five distinct cards.
///
/// Pure and order-independent: any permutation of the same five cards yields
/// the same rank.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::cards::{Card, Rank, Suit};
/// use drawpoker_engine::eval::{classify, HandRank};
///
/// let wheel = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Four, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Spades),
/// ];
/// assert_eq!(classify(&wheel), HandRank::Straight);
/// ```
pub fn classify(cards: &[Card; HAND_SIZE]) -> HandRank {
    let values = sorted_values(cards);
    let flush = is_flush(cards);
    let straight = is_straight(&values);

    if flush && straight {
        return if values == BROADWAY {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };
    }

    let mut best = classify_groups(&rank_counts(cards));
    if flush {
        best = best.max(HandRank::Flush);
    }
    if straight {
        best = best.max(HandRank::Straight);
    }
    best
}

const BROADWAY: [u8; HAND_SIZE] = [10, 11, 12, 13, 14];
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

fn sorted_values(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut v = cards.map(|c| c.rank.value());
    v.sort_unstable();
    v
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

// Ace plays high at the top of broadway or low in the wheel, never mid-run.
fn is_straight(sorted: &[u8; HAND_SIZE]) -> bool {
    *sorted == WHEEL || sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Per-rank counts indexed by rank value (2..=14 used).
///
/// ```rust
/// use drawpoker_engine::cards::{Card, Rank, Suit};
/// use drawpoker_engine::eval::rank_counts;
///
/// let counts = rank_counts(&[
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Clubs),
/// ]);
/// assert_eq!(counts[Rank::Ace.value() as usize], 2);
/// assert_eq!(counts[Rank::Two.value() as usize], 1);
/// ```
pub fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    counts
}

fn classify_groups(rank_counts: &[u8; 15]) -> HandRank {
    let mut groups: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    match groups.as_slice() {
        [4, ..] => HandRank::FourOfAKind,
        [3, 2] => HandRank::FullHouse,
        [3, ..] => HandRank::ThreeOfAKind,
        [2, 2, ..] => HandRank::TwoPair,
        [2, ..] => {
            let pair = (2..=14).find(|&r| rank_counts[r] == 2).unwrap_or(0);
            if pair >= Rank::Jack.value() as usize {
                HandRank::JacksOrBetter
            } else {
                HandRank::Nothing
            }
        }
        _ => HandRank::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn c(r: R, s: S) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn ace_cannot_bridge_a_gap() {
        // Q K A 2 3 wraps around the ace
        let hand = [
            c(R::Queen, S::Spades),
            c(R::King, S::Hearts),
            c(R::Ace, S::Diamonds),
            c(R::Two, S::Clubs),
            c(R::Three, S::Spades),
        ];
        assert_eq!(classify(&hand), HandRank::Nothing);
    }

    #[test]
    fn steel_wheel_is_straight_flush_not_royal() {
        let hand = [
            c(R::Ace, S::Clubs),
            c(R::Two, S::Clubs),
            c(R::Three, S::Clubs),
            c(R::Four, S::Clubs),
            c(R::Five, S::Clubs),
        ];
        assert_eq!(classify(&hand), HandRank::StraightFlush);
    }

    #[test]
    fn four_of_a_kind_and_trips() {
        let quads = [
            c(R::Nine, S::Clubs),
            c(R::Nine, S::Hearts),
            c(R::Nine, S::Spades),
            c(R::Nine, S::Diamonds),
            c(R::Two, S::Clubs),
        ];
        assert_eq!(classify(&quads), HandRank::FourOfAKind);

        let trips = [
            c(R::Three, S::Clubs),
            c(R::Three, S::Hearts),
            c(R::Three, S::Spades),
            c(R::King, S::Diamonds),
            c(R::Two, S::Clubs),
        ];
        assert_eq!(classify(&trips), HandRank::ThreeOfAKind);
    }

    #[test]
    fn labels_are_blank_only_for_nothing() {
        for rank in HandRank::ALL {
            assert_eq!(rank.label().is_empty(), rank == HandRank::Nothing);
        }
    }
}
