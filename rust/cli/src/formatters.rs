//! Card, hand, and pay-table formatters for terminal display.
//!
//! Pure functions from engine values to strings. Suits render as Unicode
//! symbols where the terminal can show them and as lowercase letters
//! otherwise.
//!
//! ## Unicode vs ASCII Fallback
//!
//! On Windows the module looks for a modern terminal (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION); Unix-like systems are assumed to render
//! Unicode.
//!
//! - **Unicode mode**: ♥ ♦ ♣ ♠
//! - **ASCII mode**: h d c s
//!
//! ## Example
//!
//! ```rust
//! use drawpoker_engine::cards::{Card, Rank, Suit};
//! use drawpoker_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("A"));
//! ```

use drawpoker_engine::cards::{Card, Rank, Suit};
use drawpoker_engine::engine::SlotView;
use drawpoker_engine::eval::HandRank;
use drawpoker_engine::hand::HAND_SIZE;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// # Returns
///
/// `true` if Unicode symbols are supported, `false` for ASCII fallback
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use drawpoker_engine::cards::{Card, Rank, Suit};
/// # use drawpoker_cli::formatters::format_card;
///
/// let ten_hearts = Card::new(Rank::Ten, Suit::Hearts);
/// let formatted = format_card(&ten_hearts);
/// assert!(formatted == "T♥" || formatted == "Th");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards separated by single spaces, in the order given.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// One column per position: the card (`##` when face down) followed by `*`
/// when the position is held.
///
/// # Example
///
/// ```rust
/// use drawpoker_engine::engine::SlotView;
/// # use drawpoker_cli::formatters::format_slots;
///
/// let empty = SlotView { card: None, held: false };
/// assert_eq!(format_slots(&[empty; 5]), "##  ##  ##  ##  ##");
/// ```
pub fn format_slots(slots: &[SlotView]) -> String {
    slots
        .iter()
        .map(|s| {
            let face = s.card.as_ref().map_or_else(|| "##".to_string(), format_card);
            if s.held { format!("{}*", face) } else { face }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Position numbers aligned under [`format_slots`] columns for a full hand.
pub fn format_positions() -> String {
    (1..=HAND_SIZE).map(|p| format!("{:<2}", p)).collect::<Vec<_>>().join("  ")
}

/// Winning hands print their machine label, losing hands a fixed phrase.
pub fn format_result(rank: HandRank) -> String {
    match rank {
        HandRank::Nothing => "no win".to_string(),
        r => r.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Queen), "Q");
        assert_eq!(format_rank(&Rank::King), "K");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let diamonds = format_suit(&Suit::Diamonds);
        assert!(diamonds == "♦" || diamonds == "d");

        let clubs = format_suit(&Suit::Clubs);
        assert!(clubs == "♣" || clubs == "c");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_cards_joins_with_spaces() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let formatted = format_cards(&cards);
        assert!(formatted.starts_with('A'));
        assert!(formatted.contains(" K"));
        assert_eq!(format_cards(&[]), "");
    }

    #[test]
    fn test_format_slots_marks_held_and_face_down() {
        let slots = [
            SlotView {
                card: Some(Card::new(Rank::Jack, Suit::Clubs)),
                held: true,
            },
            SlotView {
                card: None,
                held: false,
            },
        ];
        let formatted = format_slots(&slots);
        let cols: Vec<&str> = formatted.split("  ").collect();
        assert_eq!(cols.len(), 2);
        assert!(cols[0].starts_with('J') && cols[0].ends_with('*'));
        assert_eq!(cols[1], "##");
    }

    #[test]
    fn test_format_positions_has_five_columns() {
        assert_eq!(format_positions().split_whitespace().count(), HAND_SIZE);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(HandRank::Nothing), "no win");
        assert_eq!(format_result(HandRank::TwoPair), "TWO PAIRS");
    }
}
