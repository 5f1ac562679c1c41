//! Command handler modules for the drawpoker CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod paytable;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use paytable::handle_paytable_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config;
use crate::error::CliError;
use drawpoker_engine::ledger::Denomination;

pub(crate) fn load_config() -> Result<config::Config, CliError> {
    config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))
}

/// Parses a `--denom` flag value.
pub(crate) fn parse_denom_flag(raw: &str) -> Result<Denomination, CliError> {
    raw.parse::<Denomination>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))
}
