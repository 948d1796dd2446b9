//! The analyze command: per-directive popularity

use anyhow::Result;
use colored::*;
use tracing::info;

use super::shared::{
    load_config, print_json, print_parse_summary, print_selection_summary, read_input,
    setup_logging,
};
use crate::app::services::pattern_map::{CensusOutcome, build_pattern_map};
use crate::app::services::popularity::MapTransform;
use crate::app::services::unicode_format::classify;
use crate::cli::args::AnalyzeArgs;
use crate::config::CensusConfig;
use crate::constants::DEFAULT_TOP_RECORDS;

/// Example patterns printed under each directive
const EXAMPLES_SHOWN: usize = 3;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    args.validate()?;
    setup_logging(&args.common)?;

    let config = apply_overrides(load_config(&args.common)?, args);
    info!(
        "Analyzing {} (selection: {:?})",
        args.common.input.display(),
        config.selection.coverage_fraction
    );

    let text = read_input(&args.common.input)?;
    let outcome = build_pattern_map(&text, &config)?;

    if args.common.json {
        print_json(&outcome)
    } else {
        print_outcome(&outcome);
        Ok(())
    }
}

/// Fold command-line flags into the loaded configuration
pub fn apply_overrides(mut config: CensusConfig, args: &AnalyzeArgs) -> CensusConfig {
    if args.no_selection {
        config = config.without_selection();
    } else if let Some(fraction) = args.fraction {
        config = config.with_coverage_fraction(fraction);
    }

    if args.top.is_some() || args.no_sort || args.conflate {
        let mut transforms = Vec::new();
        if args.conflate {
            transforms.push(MapTransform::ConflateFamilies);
        }
        transforms.push(MapTransform::TopRecords(
            args.top.unwrap_or(DEFAULT_TOP_RECORDS),
        ));
        if !args.no_sort {
            transforms.push(MapTransform::SortByPopularity);
        }
        config = config.with_transforms(transforms);
    }

    config
}

fn print_outcome(outcome: &CensusOutcome) {
    print_parse_summary(&outcome.parse_stats);
    if let Some(selection) = &outcome.selection {
        print_selection_summary(selection);
    }

    println!(
        "\n{} ({} records, total popularity {})",
        "Directives".bright_green().bold(),
        outcome.records.len(),
        outcome.total_popularity
    );

    for (directive, stats) in outcome.directives.iter() {
        println!(
            "  {:<8} {:>10} {:>8.2}%  {}",
            directive.bright_white().bold(),
            stats.count,
            stats.frequency * 100.0,
            classify(directive).to_string().dimmed()
        );

        let examples: Vec<String> = stats
            .contributing_records
            .iter()
            .take(EXAMPLES_SHOWN)
            .map(|record| record.format.to_string())
            .collect();
        if !examples.is_empty() {
            println!("           {}", examples.join("  ").yellow());
        }
    }
}
