//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, and the coloured summaries printed
//! by more than one command.

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::debug;

use crate::app::models::Record;
use crate::app::services::coverage_selector::SelectionReport;
use crate::app::services::patterns_csv_parser::ParseStats;
use crate::cli::args::CommonArgs;
use crate::config::CensusConfig;

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pattern_census={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration and apply the flags every command shares
///
/// An explicit `--config` file must load; otherwise the user's config file is
/// used when present.
pub fn load_config(args: &CommonArgs) -> Result<CensusConfig> {
    let mut config = match &args.config {
        Some(path) => CensusConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CensusConfig::load_or_default().context("Failed to load user config")?,
    };

    if let Some(column) = args.weight_column {
        config = config.with_weight_column(column);
    }

    debug!(
        "Using weight column '{}'",
        config.csv.weight_column.name()
    );
    Ok(config)
}

/// Read the whole input CSV
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read patterns CSV {}", path.display()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn print_parse_summary(stats: &ParseStats) {
    println!("{}", "Input".bright_green().bold());
    println!(
        "  Lines: {}  Records: {} ({:.1}%)",
        stats.total_lines.to_string().bright_white().bold(),
        stats.records_parsed.to_string().bright_white().bold(),
        stats.success_rate()
    );

    let skipped = stats.records_skipped();
    if skipped > 0 {
        println!(
            "  Skipped: {} ({} templated, {} placeholder, {} by pattern, {} unparseable, {} zero weight, {} blank)",
            skipped.to_string().bright_yellow(),
            stats.skipped_embedded_expression,
            stats.skipped_placeholder,
            stats.skipped_by_pattern,
            stats.skipped_unparseable,
            stats.skipped_zero_weight,
            stats.skipped_blank
        );
    }
}

pub fn print_selection_summary(report: &SelectionReport) {
    println!("\n{}", "Coverage Selection".bright_green().bold());

    let coverage = format!("{:.2}%", report.coverage() * 100.0);
    let coverage = if report.target_reached() {
        coverage.bright_white().bold()
    } else {
        coverage.bright_red().bold()
    };

    println!(
        "  Covered: {} of {} ({}, target {:.1})",
        report.covered_weight,
        report.total_weight,
        coverage,
        report.target_weight
    );
    println!(
        "  Records selected: {}  Directives taken: {}",
        report.selected.len().to_string().bright_white().bold(),
        report.taken_directives.len().to_string().bright_white().bold()
    );
    if !report.taken_directives.is_empty() {
        println!("  {}", report.taken_directives.join(" ").cyan());
    }
}

/// One record per line, pattern highlighted
pub fn print_records(records: &[&Record]) {
    for record in records {
        println!(
            "  {:>10}  {}",
            record.popularity.to_string().bright_white(),
            record.format.to_string().yellow()
        );
    }
}
