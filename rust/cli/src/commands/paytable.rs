//! Paytable command handler.
//!
//! Prints every paying rank with its multiplier and the prize in currency
//! for the chosen denomination and bet.

use super::{load_config, parse_denom_flag};
use crate::error::CliError;
use crate::ui;
use drawpoker_engine::eval::HandRank;
use drawpoker_engine::ledger::{Bet, Ledger, prize_multiplier};
use std::io::Write;

/// Handle the paytable command.
///
/// Flags override the configured denomination and bet.
pub fn handle_paytable_command(
    denom: Option<String>,
    bet: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let denomination = match denom {
        Some(raw) => parse_denom_flag(&raw)?,
        None => cfg.denomination,
    };
    let bet = match bet {
        Some(credits) => Bet::new(credits)?,
        None => cfg.bet,
    };

    let mut ledger = Ledger::default();
    ledger.set_denomination(denomination);
    ledger.set_bet(bet);

    ui::write_heading(
        out,
        &format!(
            "Pay table: denomination {} x {} credit(s) = wager {}",
            denomination,
            bet,
            ledger.wager()
        ),
    )?;
    for rank in HandRank::ALL.into_iter().rev() {
        if rank == HandRank::Nothing {
            continue;
        }
        writeln!(
            out,
            "{:<16} {:>4}  {:>9}",
            rank.label(),
            prize_multiplier(rank),
            ledger.payout_for(rank).to_string()
        )?;
    }
    Ok(())
}
