//! Simulation command handler.
//!
//! Auto-plays rounds with a hold strategy from `drawpoker-ai`, optionally
//! writing every settled round to a JSONL history, and prints the return.
//!
//! # Examples
//!
//! ```no_run
//! use drawpoker_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // 1000 rounds with the paying-hand strategy, seed 42
//! handle_sim_command(1000, Some(42), Some("paying".into()), Some("target/sim.jsonl".into()), &mut out, &mut err).unwrap();
//! ```

use super::load_config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use drawpoker_ai::create_strategy;
use drawpoker_engine::engine::Engine;
use drawpoker_engine::errors::GameError;
use drawpoker_engine::eval::HandRank;
use drawpoker_engine::ledger::Money;
use drawpoker_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;

/// Running totals of a simulation.
#[derive(Debug, Default)]
struct Tally {
    rounds: u64,
    wagered: Money,
    won: Money,
    by_rank: [u64; HandRank::ALL.len()],
}

impl Tally {
    /// Return to player in hundredths of a percent.
    fn return_basis_points(&self) -> u64 {
        if self.wagered == Money::ZERO {
            return 0;
        }
        (u128::from(self.won.cents()) * 10_000 / u128::from(self.wagered.cents())) as u64
    }
}

/// Handle the sim command: auto-play N rounds and summarize.
///
/// # Arguments
///
/// * `rounds` - Rounds to play (stops early if the bankroll runs out)
/// * `seed` - Deck seed (default: config, then random)
/// * `strategy` - Hold strategy name (default: config)
/// * `output` - Optional JSONL round history path
/// * `out` - Output stream for the summary
/// * `err` - Output stream for warnings
pub fn handle_sim_command(
    rounds: u64,
    seed: Option<u64>,
    strategy: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config()?;
    let strategy_name = strategy.unwrap_or(cfg.strategy);
    let strategy = create_strategy(&strategy_name)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match output.as_deref() {
        Some(path) => {
            let path = std::path::Path::new(path);
            ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    let mut eng = Engine::with_balance(Some(seed), cfg.starting_balance);
    eng.set_denomination(cfg.denomination)?;
    eng.set_bet(cfg.bet)?;

    writeln!(
        out,
        "sim: rounds={} seed={} strategy={} denom={} bet={} balance={}",
        rounds,
        seed,
        strategy.name(),
        cfg.denomination,
        cfg.bet,
        eng.balance()
    )?;

    let mut tally = Tally::default();
    for _ in 0..rounds {
        match eng.start_round() {
            Ok(_) => {}
            Err(e @ GameError::InsufficientFunds { .. }) => {
                ui::display_warning(err, &format!("Stopped early: {}", e))?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        let dealt = eng
            .hand()
            .cards()
            .ok_or_else(|| CliError::Internal("dealt hand has an empty position".into()))?;
        eng.set_holds(strategy.choose_holds(&dealt))?;
        let outcome = eng.advance_round()?;

        tally.rounds += 1;
        tally.wagered = tally.wagered.saturating_add(outcome.wager);
        tally.won = tally.won.saturating_add(outcome.payout);
        tally.by_rank[outcome.rank as usize] += 1;

        if let Some(log) = logger.as_mut() {
            let id = log.next_id();
            log.write(&RoundRecord::from_outcome(id, Some(seed), &outcome))?;
        }
    }

    tracing::info!(
        rounds = tally.rounds,
        wagered = %tally.wagered,
        won = %tally.won,
        "simulation finished"
    );

    let bp = tally.return_basis_points();
    writeln!(out, "Rounds: {}", tally.rounds)?;
    writeln!(out, "Wagered: {}", tally.wagered)?;
    writeln!(out, "Won: {}", tally.won)?;
    writeln!(out, "Return: {}.{:02}%", bp / 100, bp % 100)?;
    writeln!(out, "Balance: {}", eng.balance())?;
    for rank in HandRank::ALL.into_iter().rev() {
        writeln!(out, "{:<16} {}", rank.name(), tally.by_rank[rank as usize])?;
    }
    if let Some(path) = output {
        writeln!(out, "History: {}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn sim(
        rounds: u64,
        strategy: &str,
        output: Option<String>,
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(
            rounds,
            Some(7),
            Some(strategy.to_string()),
            output,
            &mut out,
            &mut err,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn field<'a>(output: &'a str, prefix: &str) -> &'a str {
        output
            .lines()
            .find_map(|l| l.strip_prefix(prefix))
            .unwrap_or_else(|| panic!("missing {prefix} in {output}"))
    }

    #[test]
    fn test_return_basis_points() {
        let tally = Tally {
            rounds: 4,
            wagered: Money::from_cents(100),
            won: Money::from_cents(75),
            ..Tally::default()
        };
        assert_eq!(tally.return_basis_points(), 7500);
        assert_eq!(Tally::default().return_basis_points(), 0);
    }

    #[test]
    #[serial]
    fn test_sim_summary_adds_up() {
        let (result, out, _) = sim(200, "paying", None);
        assert!(result.is_ok());

        assert_eq!(field(&out, "Rounds: "), "200");
        assert_eq!(field(&out, "Wagered: "), "50.00");
        let won = Money::parse(field(&out, "Won: ")).unwrap();
        let balance = Money::parse(field(&out, "Balance: ")).unwrap();
        assert_eq!(balance.cents() + 5_000, 20_000 + won.cents());

        let counted: u64 = HandRank::ALL
            .iter()
            .map(|r| {
                field(&out, &format!("{:<16} ", r.name()))
                    .parse::<u64>()
                    .unwrap()
            })
            .sum();
        assert_eq!(counted, 200);
    }

    #[test]
    #[serial]
    fn test_sim_is_reproducible_with_seed() {
        let (_, a, _) = sim(50, "paying", None);
        let (_, b, _) = sim(50, "paying", None);
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn test_sim_unknown_strategy() {
        let (result, _, _) = sim(1, "oracle", None);
        match result {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("oracle")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_sim_writes_history() {
        let path = "target/test_sim_unit/history.jsonl";
        let _ = std::fs::remove_file(path);
        let (result, out, _) = sim(5, "discard", Some(path.to_string()));
        assert!(result.is_ok());
        assert!(out.contains("History: target/test_sim_unit/history.jsonl"));

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["holds"], serde_json::json!([false, false, false, false, false]));
            assert_eq!(v["seed"], 7);
        }
    }
}
