//! # Play Command
//!
//! Interactive draw poker on the terminal.
//!
//! Each round: the player may change the wager (`bet N`, `denom D`) and deals
//! with an empty line; five cards are shown; the player types the positions
//! to hold; the remaining positions are redrawn and the hand is paid.
//!
//! ## Features
//!
//! - Input validation with clear error messages; bad input is asked again
//! - Graceful quit handling (`q`/`quit`, or end of input)
//! - Starting balance, wager and seed from configuration, overridable by flags

use super::{load_config, parse_denom_flag};
use crate::error::CliError;
use crate::formatters::{format_cards, format_positions, format_result, format_slots};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{HoldInput, RoundCommand, parse_hold_input, parse_round_command};
use drawpoker_engine::engine::Engine;
use drawpoker_engine::errors::GameError;
use drawpoker_engine::hand::HAND_SIZE;
use drawpoker_engine::ledger::{Bet, Denomination, Money};
use std::io::{BufRead, Write};

/// Handle the play command: interactive draw poker.
///
/// # Arguments
///
/// * `rounds` - Stop after this many settled rounds (default: until quit)
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `denom` - Coin value (default: config)
/// * `bet` - Credits per round (default: config)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player commands
///
/// # Examples
///
/// ```ignore
/// use drawpoker_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Some(1), None, None, None, &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    denom: Option<String>,
    bet: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config()?;
    let denomination = match denom {
        Some(raw) => parse_denom_flag(&raw)?,
        None => cfg.denomination,
    };
    let bet = match bet {
        Some(credits) => Bet::new(credits)?,
        None => cfg.bet,
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut eng = Engine::with_balance(Some(seed), cfg.starting_balance);
    eng.set_denomination(denomination)?;
    eng.set_bet(bet)?;

    writeln!(
        out,
        "play: rounds={} seed={} denom={} bet={} balance={}",
        rounds.map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
        seed,
        denomination,
        bet,
        eng.balance()
    )?;

    let mut played = 0u32;
    'session: while rounds.is_none_or(|n| played < n) {
        if eng.balance() < cheapest_wager() {
            writeln!(out, "Out of credits.")?;
            break;
        }

        // Between rounds: wager changes until the player deals or quits.
        loop {
            write!(
                out,
                "Round {} | balance {} | wager {} x {} = {} | [enter]=deal, bet N, denom D, q: ",
                played + 1,
                eng.balance(),
                eng.ledger().denomination(),
                eng.ledger().bet(),
                eng.ledger().wager()
            )?;
            out.flush()?;

            let Some(input) = read_stdin_line(stdin) else {
                break 'session;
            };
            match parse_round_command(&input) {
                RoundCommand::Deal => match eng.start_round() {
                    Ok(_) => break,
                    Err(e @ GameError::InsufficientFunds { .. }) => {
                        ui::write_error(err, &e.to_string())?;
                    }
                    Err(e) => return Err(e.into()),
                },
                RoundCommand::Bet(b) => eng.set_bet(b)?,
                RoundCommand::Denom(d) => eng.set_denomination(d)?,
                RoundCommand::Quit => break 'session,
                RoundCommand::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }

        let view = eng.view();
        writeln!(out, "Dealt: {}", format_slots(&view.slots))?;
        writeln!(out, "       {}", format_positions())?;
        if !view.rank_label.is_empty() {
            writeln!(out, "Showing: {}", view.rank_label)?;
        }

        let holds = loop {
            write!(out, "Hold (e.g. 1 3 5, all, none, q): ")?;
            out.flush()?;
            let Some(input) = read_stdin_line(stdin) else {
                abandon_round(err)?;
                break 'session;
            };
            match parse_hold_input(&input) {
                HoldInput::Holds(h) => break h,
                HoldInput::Quit => {
                    abandon_round(err)?;
                    break 'session;
                }
                HoldInput::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        };

        eng.set_holds(holds)?;
        let outcome = eng.advance_round()?;
        writeln!(out, "Held:  {}", held_summary(&outcome.holds))?;
        writeln!(out, "Final: {}", format_cards(&outcome.final_hand))?;
        if outcome.payout.cents() > 0 {
            writeln!(
                out,
                "Result: {} pays {}",
                format_result(outcome.rank),
                outcome.payout
            )?;
        } else {
            writeln!(out, "Result: {}", format_result(outcome.rank))?;
        }
        writeln!(out, "Balance: {}", outcome.balance)?;
        played += 1;
    }

    writeln!(out, "Rounds played: {}", played)?;
    writeln!(out, "Final balance: {}", eng.balance())?;
    Ok(())
}

/// Smallest wager the machine accepts; below it no setting can deal.
fn cheapest_wager() -> Money {
    Denomination::Quarter
        .amount()
        .times(u64::from(Bet::MIN.credits()))
}

fn abandon_round(err: &mut dyn Write) -> Result<(), CliError> {
    ui::display_warning(err, "Round abandoned before the draw; the wager is forfeited.")?;
    Ok(())
}

fn held_summary(holds: &[bool; HAND_SIZE]) -> String {
    let kept: Vec<String> = holds
        .iter()
        .enumerate()
        .filter(|(_, h)| **h)
        .map(|(i, _)| (i + 1).to_string())
        .collect();
    if kept.is_empty() {
        "none".to_string()
    } else {
        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn play(
        rounds: Option<u32>,
        bet: Option<u8>,
        input: &str,
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(rounds, Some(42), None, bet, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_held_summary() {
        assert_eq!(held_summary(&[true, false, true, false, true]), "1 3 5");
        assert_eq!(held_summary(&[false; 5]), "none");
    }

    #[test]
    fn test_cheapest_wager_is_a_quarter() {
        assert_eq!(cheapest_wager().cents(), 25);
    }

    #[test]
    #[serial]
    fn test_play_one_round_draw_all() {
        let (result, out, err) = play(Some(1), Some(1), "\nnone\n");
        assert!(result.is_ok(), "stderr: {err}");
        assert!(out.contains("play: rounds=1 seed=42"));
        assert!(out.contains("Dealt: "));
        assert!(out.contains("Held:  none"));
        assert!(out.contains("Final: "));
        assert!(out.contains("Rounds played: 1"));
    }

    #[test]
    #[serial]
    fn test_play_quit_before_deal() {
        let (result, out, _) = play(None, None, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("rounds=unlimited"));
        assert!(out.contains("Rounds played: 0"));
        assert!(out.contains("Final balance: 200.00"));
    }

    #[test]
    #[serial]
    fn test_play_quit_at_hold_forfeits_wager() {
        let (result, out, err) = play(None, Some(2), "\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("WARNING: Round abandoned"));
        assert!(out.contains("Final balance: 199.50"));
    }

    #[test]
    #[serial]
    fn test_play_invalid_input_is_reported_and_asked_again() {
        let (result, out, err) = play(Some(1), None, "bet 9\nfoo\n\n7\n1 2\n");
        assert!(result.is_ok());
        assert!(err.contains("Invalid bet: 9"));
        assert!(err.contains("Unrecognized command 'foo'"));
        assert!(err.contains("Position 7 is out of range"));
        assert!(out.contains("Held:  1 2"));
        assert!(out.contains("Rounds played: 1"));
    }

    #[test]
    #[serial]
    fn test_play_wager_change_between_rounds() {
        let (result, out, _) = play(Some(1), None, "bet 5\ndenom 1\n\nall\n");
        assert!(result.is_ok());
        assert!(out.contains("wager 1.00 x 5 = 5.00"));
        assert!(out.contains("Held:  1 2 3 4 5"));
    }

    #[test]
    #[serial]
    fn test_play_end_of_input_ends_session() {
        let (result, out, _) = play(Some(3), None, "");
        assert!(result.is_ok());
        assert!(out.contains("Rounds played: 0"));
    }

    #[test]
    #[serial]
    fn test_play_rejects_zero_rounds() {
        let (result, _, _) = play(Some(0), None, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
