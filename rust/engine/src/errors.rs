use thiserror::Error;

use crate::engine::RoundPhase;
use crate::ledger::Money;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{command} is not allowed while {phase}")]
    InvalidState {
        command: &'static str,
        phase: RoundPhase,
    },
    #[error("Insufficient funds: balance {balance} cannot cover wager {wager}")]
    InsufficientFunds { balance: Money, wager: Money },
    #[error("Invalid denomination: {0} (expected 0.25, 0.50 or 1.00)")]
    InvalidDenomination(String),
    #[error("Invalid bet: {0} (expected 1-5 credits)")]
    InvalidBet(u8),
    #[error("Invalid hand position: {0} (expected 0-4)")]
    InvalidPosition(usize),
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}
