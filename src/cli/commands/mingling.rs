//! The mingling command: patterns that interleave directive categories

use anyhow::Result;
use colored::*;

use super::shared::{load_config, print_json, print_records, read_input, setup_logging};
use crate::app::models::total_popularity;
use crate::app::services::mingling::mingling_records;
use crate::app::services::patterns_csv_parser::PatternsCsvParser;
use crate::cli::args::MinglingArgs;

pub fn run_mingling(args: &MinglingArgs) -> Result<()> {
    args.common.validate()?;
    setup_logging(&args.common)?;

    let config = load_config(&args.common)?;
    let text = read_input(&args.common.input)?;
    let parsed = PatternsCsvParser::new(&config.csv)?.parse_str(&text)?;

    let mingling = mingling_records(&parsed.records);

    if args.common.json {
        return print_json(&mingling);
    }

    let weight: u64 = mingling.iter().map(|record| record.popularity).sum();
    println!(
        "{} {} of {} records ({} of {} popularity)",
        "Mingling patterns:".bright_green().bold(),
        mingling.len().to_string().bright_white().bold(),
        parsed.records.len(),
        weight,
        total_popularity(&parsed.records)
    );
    print_records(&mingling);
    Ok(())
}
