//! Deal command handler for single hand dealing and display.
//!
//! Deals one five-card hand from a fresh machine and prints it with its rank.
//! The command supports optional seeding for deterministic dealing.

use crate::error::CliError;
use crate::formatters::format_cards;
use drawpoker_engine::engine::Engine;
use drawpoker_engine::eval::classify;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Examples
///
/// ```ignore
/// use drawpoker_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let mut eng = Engine::new(seed);
    eng.start_round()?;
    let cards = eng
        .hand()
        .cards()
        .ok_or_else(|| CliError::Internal("dealt hand has an empty position".into()))?;

    writeln!(out, "Hand: {}", format_cards(&cards))?;
    writeln!(out, "Rank: {}", classify(&cards))?;
    Ok(())
}
