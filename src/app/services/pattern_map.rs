//! End-to-end pattern census pipeline
//!
//! CSV text is parsed into records, optionally reduced by coverage selection,
//! aggregated per directive, and finally shaped by the configured transforms.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::app::models::{PopularityMap, Record, total_popularity};
use crate::app::services::coverage_selector::{CoverageSelector, SelectionReport};
use crate::app::services::patterns_csv_parser::{ParseStats, PatternsCsvParser};
use crate::app::services::popularity::{TransformPipeline, aggregate};
use crate::config::CensusConfig;
use crate::error::Result;

/// Everything a census run produced
#[derive(Debug, Clone, Serialize)]
pub struct CensusOutcome {
    pub generated_at: DateTime<Utc>,
    pub parse_stats: ParseStats,
    /// Present when coverage selection ran
    pub selection: Option<SelectionReport>,
    /// Records the map was aggregated from
    #[serde(skip)]
    pub records: Vec<Record>,
    pub total_popularity: u64,
    pub directives: PopularityMap,
}

/// Run the whole pipeline over CSV text
pub fn build_pattern_map(text: &str, config: &CensusConfig) -> Result<CensusOutcome> {
    config.validate()?;

    let parsed = PatternsCsvParser::new(&config.csv)?.parse_str(text)?;

    let (records, selection) = match config.selection.coverage_fraction {
        Some(fraction) => {
            let report = CoverageSelector::from_config(&config.selection)
                .select_with_report(&parsed.records, fraction);
            (report.selected.clone(), Some(report))
        }
        None => (parsed.records, None),
    };

    let raw = aggregate(&records);
    let directives = TransformPipeline::new(config.report.transforms.clone()).run(&raw);

    info!(
        "Census complete: {} records analyzed, {} directives reported",
        records.len(),
        directives.len()
    );

    Ok(CensusOutcome {
        generated_at: Utc::now(),
        parse_stats: parsed.stats,
        selection,
        total_popularity: total_popularity(&records),
        records,
        directives,
    })
}

/// Default census: 99% coverage, ten example records per directive, sorted
/// by popularity
pub fn build_default_pattern_map(text: &str) -> Result<PopularityMap> {
    Ok(build_pattern_map(text, &CensusConfig::default())?.directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::popularity::MapTransform;
    use crate::error::CensusError;

    fn sample_csv() -> String {
        [
            "\"pattern\",\"occurrences\",\"files\",\"repos\"",
            "\"yyyy-MM-dd\",\"900\",\"500\",\"90\"",
            "\"yyyy-MM-dd HH:mm:ss\",\"700\",\"300\",\"70\"",
            "\"dd/MM/yy\",\"200\",\"120\",\"20\"",
            "\"HH:mm\",\"150\",\"60\",\"15\"",
            "\"yyyy-MM-dd'T'HH:mm:ss.SSSXXX\",\"40\",\"15\",\"4\"",
            "\"${pattern}\",\"80\",\"80\",\"8\"",
            "\"G 'bad\",\"3\",\"3\",\"1\"",
            "\"EEE MMM dd HH:mm:ss zzz yyyy\",\"9\",\"5\",\"2\"",
        ]
        .join("\n")
    }

    #[test]
    fn test_pipeline_without_selection() {
        let config = CensusConfig::default()
            .without_selection()
            .with_transforms(Vec::new());

        let outcome = build_pattern_map(&sample_csv(), &config).unwrap();

        assert!(outcome.selection.is_none());
        assert_eq!(outcome.records.len(), 6);
        assert_eq!(outcome.total_popularity, 1000);
        assert_eq!(outcome.parse_stats.skipped_embedded_expression, 1);
        assert_eq!(outcome.parse_stats.skipped_unparseable, 1);
        assert_eq!(outcome.directives, aggregate(&outcome.records));
    }

    #[test]
    fn test_selection_reduces_records() {
        let config = CensusConfig::default()
            .with_coverage_fraction(0.8)
            .with_transforms(Vec::new());

        let outcome = build_pattern_map(&sample_csv(), &config).unwrap();

        let selection = outcome.selection.as_ref().unwrap();
        assert!(selection.target_reached());
        assert_eq!(outcome.records, selection.selected);
        assert!(outcome.records.len() < 6);
        assert!(!outcome.directives.contains("zzz"));
    }

    #[test]
    fn test_default_pipeline_is_sorted_and_trimmed() {
        let map = build_default_pattern_map(&sample_csv()).unwrap();

        let counts: Vec<u64> = map.iter().map(|(_, s)| s.count).collect();
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(map.iter().all(|(_, s)| s.contributing_records.len() <= 10));
        assert_eq!(map.keys().next(), Some("MM"));
    }

    #[test]
    fn test_conflated_pipeline() {
        let config = CensusConfig::default()
            .without_selection()
            .with_transforms(vec![MapTransform::ConflateFamilies]);

        let outcome = build_pattern_map(&sample_csv(), &config).unwrap();

        assert!(outcome.directives.contains("y"));
        assert!(!outcome.directives.contains("yyyy"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CensusConfig::default().with_coverage_fraction(2.0);
        let result = build_pattern_map(&sample_csv(), &config);
        assert!(matches!(result, Err(CensusError::Configuration { .. })));
    }
}
