//! The select command: records covered by a greedy directive selection

use anyhow::Result;
use colored::*;
use tracing::info;

use super::shared::{
    load_config, print_json, print_parse_summary, print_records, print_selection_summary,
    read_input, setup_logging,
};
use crate::app::services::coverage_selector::CoverageSelector;
use crate::app::services::patterns_csv_parser::PatternsCsvParser;
use crate::cli::args::SelectArgs;
use crate::constants::DEFAULT_COVERAGE_FRACTION;

pub fn run_select(args: &SelectArgs) -> Result<()> {
    args.validate()?;
    setup_logging(&args.common)?;

    let config = load_config(&args.common)?;
    let fraction = args
        .fraction
        .or(config.selection.coverage_fraction)
        .unwrap_or(DEFAULT_COVERAGE_FRACTION);

    let text = read_input(&args.common.input)?;
    let parsed = PatternsCsvParser::new(&config.csv)?.parse_str(&text)?;
    info!("{}", parsed.stats.summary());

    let report =
        CoverageSelector::from_config(&config.selection).select_with_report(&parsed.records, fraction);

    if args.common.json {
        return print_json(&report);
    }

    print_parse_summary(&parsed.stats);
    print_selection_summary(&report);
    println!("\n{}", "Selected Records".bright_green().bold());
    print_records(&report.selected.iter().collect::<Vec<_>>());
    Ok(())
}
