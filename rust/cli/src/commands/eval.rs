//! Eval command handler.
//!
//! Classifies five cards typed on the command line and shows the prize
//! multiplier for the resulting rank.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_hand;
use drawpoker_engine::eval::classify;
use drawpoker_engine::ledger::prize_multiplier;
use std::io::Write;

/// Handle the eval command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` unless `cards` names exactly five
/// distinct cards in short form.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let hand = parse_hand(cards).map_err(CliError::InvalidInput)?;
    let rank = classify(&hand);

    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Rank: {}", rank)?;
    writeln!(out, "Pays: {} per credit", prize_multiplier(rank))?;
    Ok(())
}
