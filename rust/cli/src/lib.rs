//! # drawpoker CLI Library
//!
//! Command-line front end for the draw poker engine: play interactively,
//! deal or classify single hands, simulate strategies, and inspect the pay
//! table and configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawpoker", "play", "--rounds", "10"];
//! let code = drawpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive rounds: deal, hold, draw, payout
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Classify five cards
//! - `sim`: Auto-play rounds with a hold strategy and summarize the return
//! - `cfg`: Display current configuration settings
//! - `paytable`: Print the prize table for a wager

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawPokerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_paytable_command,
    handle_play_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "sim", "cfg", "paytable"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Interactive input for `play` is read from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["drawpoker", "deal", "--seed", "42"];
/// let code = drawpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream for interactive commands.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("\nall\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = drawpoker_cli::run_with_input(
///     ["drawpoker", "play", "--rounds", "1", "--seed", "3"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawPokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "drawpoker: Jacks or Better draw poker");
                    write_or_exit!(err, "Usage: drawpoker <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: drawpoker --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            denom,
            bet,
        } => handle_play_command(rounds, seed, denom, bet, out, err, input),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Sim {
            rounds,
            seed,
            strategy,
            output,
        } => handle_sim_command(rounds, seed, strategy, output, out, err),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Paytable { denom, bet } => handle_paytable_command(denom, bet, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_command_parses() {
        let commands = vec![
            vec!["drawpoker", "play"],
            vec!["drawpoker", "deal"],
            vec!["drawpoker", "eval", "As", "Ks", "Qs", "Js", "Ts"],
            vec!["drawpoker", "sim", "--rounds", "1"],
            vec!["drawpoker", "cfg"],
            vec!["drawpoker", "paytable"],
        ];
        assert_eq!(commands.len(), COMMANDS.len());
        for (cmd_args, name) in commands.iter().zip(COMMANDS) {
            assert_eq!(&cmd_args[1], name);
            let result = DrawPokerCli::try_parse_from(cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_bet_range_enforced_by_parser() {
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "play", "--bet", "0"]).is_err());
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "play", "--bet", "6"]).is_err());
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "paytable", "--bet", "5"]).is_ok());
    }

    #[test]
    fn test_play_rounds_must_be_positive() {
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "play", "--rounds", "0"]).is_err());
    }

    #[test]
    fn test_sim_requires_rounds() {
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "sim"]).is_err());
    }

    #[test]
    fn test_eval_requires_cards() {
        assert!(DrawPokerCli::try_parse_from(["drawpoker", "eval"]).is_err());
    }
}
