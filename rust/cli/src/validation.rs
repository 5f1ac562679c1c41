//! Input parsing and validation for interactive commands.
//!
//! This module turns user text into engine values:
//! - Hold selections typed at the draw prompt (`1 3 5`, `all`, `none`)
//! - Wager changes and quit requests between rounds
//! - Cards in short form (`As`, `T♥`, `10h`)
//!
//! Parsers return an enum with an `Invalid(String)` case, or a
//! `Result<_, String>`, so the caller can report the message and ask again.

use drawpoker_engine::cards::{Card, Rank, Suit};
use drawpoker_engine::hand::HAND_SIZE;
use drawpoker_engine::ledger::{Bet, Denomination};
use std::collections::HashSet;

/// What the player typed at the hold prompt.
#[derive(Debug, PartialEq)]
pub enum HoldInput {
    /// One flag per position, `true` = keep
    Holds([bool; HAND_SIZE]),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse the hold prompt.
///
/// Accepts (case-insensitive):
/// - 1-based positions separated by spaces or commas: `1 3 5`, `2,4`
/// - `all` → keep every card
/// - `none` or empty input → draw five new cards
/// - `q` or `quit`
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::{parse_hold_input, HoldInput};
///
/// assert_eq!(
///     parse_hold_input("1 3 5"),
///     HoldInput::Holds([true, false, true, false, true])
/// );
/// assert_eq!(parse_hold_input(""), HoldInput::Holds([false; 5]));
/// assert_eq!(parse_hold_input("quit"), HoldInput::Quit);
///
/// match parse_hold_input("6") {
///     HoldInput::Invalid(msg) => assert!(msg.contains("1-5")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_hold_input(input: &str) -> HoldInput {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "q" | "quit" => return HoldInput::Quit,
        "" | "none" => return HoldInput::Holds([false; HAND_SIZE]),
        "all" => return HoldInput::Holds([true; HAND_SIZE]),
        _ => {}
    }

    let mut holds = [false; HAND_SIZE];
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<usize>() {
            Ok(pos) if (1..=HAND_SIZE).contains(&pos) => holds[pos - 1] = true,
            Ok(pos) => {
                return HoldInput::Invalid(format!(
                    "Position {} is out of range (positions are 1-5)",
                    pos
                ));
            }
            Err(_) => {
                return HoldInput::Invalid(format!(
                    "Unrecognized hold '{}'. Enter positions 1-5 (e.g. '1 3 5'), all, none, or q",
                    token
                ));
            }
        }
    }
    HoldInput::Holds(holds)
}

/// What the player typed between rounds.
#[derive(Debug, PartialEq)]
pub enum RoundCommand {
    /// Deal the next round with the current wager
    Deal,
    /// Change the number of credits
    Bet(Bet),
    /// Change the coin value
    Denom(Denomination),
    Quit,
    Invalid(String),
}

/// Parse the prompt shown before each deal.
///
/// Empty input, `d` or `deal` deals; `bet N` and `denom D` change the wager;
/// `q`/`quit` ends the session.
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::{parse_round_command, RoundCommand};
/// use drawpoker_engine::ledger::{Bet, Denomination};
///
/// assert_eq!(parse_round_command(""), RoundCommand::Deal);
/// assert_eq!(parse_round_command("bet 5"), RoundCommand::Bet(Bet::MAX));
/// assert_eq!(
///     parse_round_command("denom 1.00"),
///     RoundCommand::Denom(Denomination::Dollar)
/// );
/// assert!(matches!(parse_round_command("bet 9"), RoundCommand::Invalid(_)));
/// ```
pub fn parse_round_command(input: &str) -> RoundCommand {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return RoundCommand::Deal;
    };

    match head {
        "d" | "deal" => RoundCommand::Deal,
        "q" | "quit" => RoundCommand::Quit,
        "bet" => {
            let Some(arg) = parts.get(1) else {
                return RoundCommand::Invalid(
                    "Bet requires a number of credits (e.g., 'bet 5')".to_string(),
                );
            };
            match arg.parse::<u8>() {
                Ok(credits) => match Bet::new(credits) {
                    Ok(bet) => RoundCommand::Bet(bet),
                    Err(e) => RoundCommand::Invalid(e.to_string()),
                },
                Err(_) => RoundCommand::Invalid(format!("Invalid bet '{}'", arg)),
            }
        }
        "denom" => {
            let Some(arg) = parts.get(1) else {
                return RoundCommand::Invalid(
                    "Denom requires a coin value (e.g., 'denom 0.50')".to_string(),
                );
            };
            match arg.parse::<Denomination>() {
                Ok(d) => RoundCommand::Denom(d),
                Err(e) => RoundCommand::Invalid(e.to_string()),
            }
        }
        _ => RoundCommand::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: deal (or empty), bet <1-5>, denom <0.25|0.50|1.00>, q",
            head
        )),
    }
}

/// Parse one card in short form: rank (`2`-`9`, `T`/`10`, `J`, `Q`, `K`, `A`)
/// followed by a suit letter (`h d c s`) or symbol (`♥ ♦ ♣ ♠`).
///
/// # Example
///
/// ```rust
/// # use drawpoker_cli::validation::parse_card;
/// use drawpoker_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("As"), Ok(Card::new(Rank::Ace, Suit::Spades)));
/// assert_eq!(parse_card("10h"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(parse_card("q♦"), Ok(Card::new(Rank::Queen, Suit::Diamonds)));
/// assert!(parse_card("1s").is_err());
/// ```
pub fn parse_card(input: &str) -> Result<Card, String> {
    let s = input.trim();
    let invalid = || format!("Invalid card '{}' (expected e.g. As, Th, 10h, 7♣)", input);

    let mut chars = s.chars();
    let suit_ch = chars.next_back().ok_or_else(invalid)?;
    let rank_str = chars.as_str().to_ascii_uppercase();

    let rank = match rank_str.as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => return Err(invalid()),
    };
    let suit = match suit_ch.to_ascii_lowercase() {
        'h' | '♥' => Suit::Hearts,
        'd' | '♦' => Suit::Diamonds,
        'c' | '♣' => Suit::Clubs,
        's' | '♠' => Suit::Spades,
        _ => return Err(invalid()),
    };
    Ok(Card::new(rank, suit))
}

/// Parse exactly five distinct cards.
pub fn parse_hand(inputs: &[String]) -> Result<[Card; HAND_SIZE], String> {
    if inputs.len() != HAND_SIZE {
        return Err(format!(
            "Expected {} cards, got {}",
            HAND_SIZE,
            inputs.len()
        ));
    }
    let mut cards = Vec::with_capacity(HAND_SIZE);
    let mut seen = HashSet::new();
    for raw in inputs {
        let card = parse_card(raw)?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card '{}'", raw));
        }
        cards.push(card);
    }
    cards
        .try_into()
        .map_err(|_| format!("Expected {} cards", HAND_SIZE))
}
