//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Jacks or Better video draw poker.
#[derive(Debug, Parser)]
#[command(name = "drawpoker", version, about = "Jacks or Better draw poker machine")]
pub struct DrawPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactively: deal, choose holds, draw, get paid
    Play {
        /// Stop after N rounds (default: until quit or end of input)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Deck seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Coin value: 0.25, 0.50 or 1.00
        #[arg(long)]
        denom: Option<String>,
        /// Credits wagered per round (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        bet: Option<u8>,
    },
    /// Deal one hand and show its rank
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify five cards given in short form (e.g. As Ks Qs Js Ts)
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Auto-play rounds with a hold strategy and summarize the return
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Hold strategy (paying, discard)
        #[arg(long)]
        strategy: Option<String>,
        /// Write one JSON line per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the resolved configuration with the source of each value
    Cfg,
    /// Print the prize table for a wager
    Paytable {
        #[arg(long)]
        denom: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        bet: Option<u8>,
    },
}
