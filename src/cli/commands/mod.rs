//! Command implementations for the pattern census CLI
//!
//! Each command is implemented in its own module and reads the input CSV
//! synchronously.

pub mod analyze;
pub mod mingling;
pub mod select;
pub mod shared;

use anyhow::Result;

use crate::cli::args::Commands;

/// Dispatch to the handler for a subcommand
///
/// - `analyze`: directive popularity map
/// - `select`: greedy coverage selection
/// - `mingling`: patterns interleaving date, time, and zone directives
pub fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run_analyze(args),
        Commands::Select(args) => select::run_select(args),
        Commands::Mingling(args) => mingling::run_mingling(args),
    }
}
