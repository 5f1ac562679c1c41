//! # drawpoker-ai: Hold Strategies for Draw Poker
//!
//! Decides which of the five dealt cards to keep through the draw, so rounds
//! can be played without a human (simulation, hints).
//!
//! ## Core Components
//!
//! - [`HoldStrategy`] - Trait defining the interface for hold decisions
//! - [`baseline`] - Paying-hand and discard-everything strategies
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use drawpoker_ai::{create_strategy, HoldStrategy};
//! use drawpoker_engine::engine::Engine;
//!
//! let strategy = create_strategy("paying").unwrap();
//!
//! let mut engine = Engine::new(Some(42));
//! engine.start_round().expect("Failed to start round");
//! let dealt = engine.hand().cards().expect("five cards dealt");
//! engine.set_holds(strategy.choose_holds(&dealt)).unwrap();
//! let outcome = engine.advance_round().unwrap();
//! println!("{} chose {:?} -> {}", strategy.name(), outcome.holds, outcome.rank);
//! ```

use drawpoker_engine::cards::Card;
use drawpoker_engine::hand::HAND_SIZE;
use thiserror::Error;

pub mod baseline;

/// Trait defining the interface for automated hold decisions.
///
/// Implementations must be deterministic: the same five cards always produce
/// the same holds, so seeded simulations stay reproducible.
pub trait HoldStrategy: Send + Sync {
    /// Returns one flag per position; `true` keeps the card through the draw.
    fn choose_holds(&self, cards: &[Card; HAND_SIZE]) -> [bool; HAND_SIZE];

    /// Return the name/identifier of this strategy.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unknown strategy: {0} (expected one of: {list})", list = STRATEGIES.join(", "))]
    Unknown(String),
}

/// Names accepted by [`create_strategy`].
pub const STRATEGIES: &[&str] = &["paying", "discard"];

/// Factory function to create hold strategies by name.
///
/// # Supported Strategies
///
/// - `"paying"` - Keep the cards that form a paying hand (or a low pair)
/// - `"discard"` - Draw five new cards every round
///
/// # Example
///
/// ```rust
/// use drawpoker_ai::create_strategy;
///
/// let s = create_strategy("discard").unwrap();
/// assert_eq!(s.name(), "discard");
/// assert!(create_strategy("oracle").is_err());
/// ```
pub fn create_strategy(name: &str) -> Result<Box<dyn HoldStrategy>, StrategyError> {
    match name {
        "paying" => Ok(Box::new(baseline::PayingHoldStrategy::new())),
        "discard" => Ok(Box::new(baseline::DiscardAll)),
        _ => Err(StrategyError::Unknown(name.to_string())),
    }
}
