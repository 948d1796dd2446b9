//! Command-line argument definitions for the pattern census
//!
//! This module defines the CLI interface using the clap derive API. Every
//! command reads a harvested patterns CSV; flags override the values loaded
//! from the configuration file.

use crate::app::services::patterns_csv_parser::WeightColumn;
use crate::{CensusError, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the pattern census
///
/// Reports which date/time formatting directives real code uses most, and
/// which directives cover a target share of real-world usage.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pattern_census",
    version,
    about = "Directive popularity and coverage analysis for date/time formatting patterns",
    long_about = "Reads a CSV of date/time formatting patterns harvested from source code, \
                  parses each Unicode pattern into directives, and reports per-directive \
                  popularity. Optionally reduces the corpus to the records covered by a \
                  greedily chosen directive set before aggregating."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Aggregate directive popularity (default command)
    Analyze(AnalyzeArgs),
    /// List the records covered by a greedy directive selection
    Select(SelectArgs),
    /// List patterns that interleave date, time, and zone directives
    Mingling(MinglingArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Patterns CSV with columns pattern, occurrences, files, repos
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Configuration file (JSON)
    ///
    /// If not specified, uses `<config dir>/pattern-census/config.json` when it
    /// exists and built-in defaults otherwise.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file (JSON)"
    )]
    pub config: Option<PathBuf>,

    /// Count column used as popularity
    #[arg(
        short = 'w',
        long = "weight-column",
        value_enum,
        value_name = "COLUMN",
        help = "Count column used as popularity"
    )]
    pub weight_column: Option<WeightColumn>,

    /// Print results as JSON instead of coloured text
    #[arg(long = "json", help = "Print results as JSON")]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Share of total usage to cover before aggregating
    #[arg(
        short = 'f',
        long = "fraction",
        value_name = "FRACTION",
        help = "Share of total usage to cover before aggregating (0 < f <= 1)",
        conflicts_with = "no_selection"
    )]
    pub fraction: Option<f64>,

    /// Aggregate every parsed record without coverage selection
    #[arg(long = "no-selection", help = "Aggregate every parsed record")]
    pub no_selection: bool,

    /// Keep at most this many example records per directive
    #[arg(
        short = 't',
        long = "top",
        value_name = "N",
        help = "Keep at most N example records per directive"
    )]
    pub top: Option<usize>,

    /// Keep directives in first-seen order
    #[arg(long = "no-sort", help = "Keep directives in first-seen order")]
    pub no_sort: bool,

    /// Merge directives sharing a pattern letter (yyyy and yy become y)
    #[arg(long = "conflate", help = "Merge directives sharing a pattern letter")]
    pub conflate: bool,
}

/// Arguments for the select command
#[derive(Debug, Clone, Parser)]
pub struct SelectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Share of total usage to cover
    #[arg(
        short = 'f',
        long = "fraction",
        value_name = "FRACTION",
        help = "Share of total usage to cover (0 < f <= 1)"
    )]
    pub fraction: Option<f64>,
}

/// Arguments for the mingling command
#[derive(Debug, Clone, Parser)]
pub struct MinglingArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Args {
    /// Get the command to execute
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl Commands {
    /// Options shared by every command
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Analyze(args) => &args.common,
            Commands::Select(args) => &args.common,
            Commands::Mingling(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Validate that the input file exists
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(CensusError::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(CensusError::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(CensusError::configuration(format!(
                    "Config file does not exist: {}",
                    config.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        validate_fraction(self.fraction)?;

        if self.top == Some(0) {
            return Err(CensusError::configuration(
                "--top must keep at least one record",
            ));
        }

        Ok(())
    }
}

impl SelectArgs {
    /// Validate the select command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        validate_fraction(self.fraction)
    }
}

fn validate_fraction(fraction: Option<f64>) -> Result<()> {
    match fraction {
        Some(f) if !(f > 0.0 && f <= 1.0) => Err(CensusError::configuration(format!(
            "Fraction must be in (0, 1], got {}",
            f
        ))),
        _ => Ok(()),
    }
}
