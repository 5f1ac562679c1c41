//! # drawpoker-engine: Draw Poker Game Engine Core
//!
//! A single-player five-card draw poker machine (Jacks or Better): deal five
//! cards, hold any subset, redraw the rest, classify the final hand and pay a
//! wager-scaled prize. Deals are reproducible from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card master set
//! - [`deck`] - Seeded ChaCha20 deck with uniform draw without replacement
//! - [`hand`] - Five positional slots (Empty / Filled / Held)
//! - [`eval`] - Hand classification into the ten pay ranks
//! - [`ledger`] - Money, denomination, bet, pay table and balance
//! - [`engine`] - Round controller (wager → deal → hold/draw → payout)
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for engine commands
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_engine::cards::{Card, Rank, Suit};
//! use drawpoker_engine::eval::{classify, HandRank};
//!
//! let cards = [
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Spades),
//! ];
//! assert_eq!(classify(&cards), HandRank::RoyalFlush);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use drawpoker_engine::engine::Engine;
//! use drawpoker_engine::ledger::{Bet, Denomination};
//!
//! let mut engine = Engine::new(Some(42));
//! engine.set_denomination(Denomination::Half).unwrap();
//! engine.set_bet(Bet::new(5).unwrap()).unwrap();
//!
//! let view = engine.start_round().unwrap();
//! println!("dealt: {:?} {}", view.slots, view.rank_label);
//!
//! engine.set_holds([true, true, false, false, false]).unwrap();
//! let outcome = engine.advance_round().unwrap();
//! println!("{} pays {}", outcome.rank, outcome.payout);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod hand;
pub mod ledger;
pub mod logger;
