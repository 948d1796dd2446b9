//! Core parsing orchestration for pattern CSV files

use std::path::Path;
use tracing::{debug, info};

use super::record_filter::RecordFilter;
use super::stats::{ParseResult, ParseStats, SkipReason};
use super::tokenizer::{WeightColumn, tokenize_line};
use crate::app::models::Record;
use crate::app::services::unicode_format::parse_unicode_format;
use crate::config::CsvConfig;
use crate::constants::{ESCAPED_NEWLINE, ESCAPED_NEWLINE_REPLACEMENT};
use crate::error::Result;

/// Parser turning harvested pattern CSV text into records
#[derive(Debug, Clone, Default)]
pub struct PatternsCsvParser {
    filter: RecordFilter,
    weight_column: WeightColumn,
}

impl PatternsCsvParser {
    /// Build a parser from CSV settings
    pub fn new(config: &CsvConfig) -> Result<Self> {
        let filter = RecordFilter::new(
            config.embedded_expression_marker,
            config.placeholder_tokens.clone(),
        )
        .with_skip_patterns(&config.skip_patterns)?;

        Ok(Self {
            filter,
            weight_column: config.weight_column,
        })
    }

    pub fn weight_column(&self) -> WeightColumn {
        self.weight_column
    }

    /// Read and parse a CSV file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        let contents = std::fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", contents.len(), path.display());
        self.parse_str(&contents)
    }

    /// Parse CSV text. The first line is a header and is always dropped.
    ///
    /// Templated, placeholder, unparseable, and zero-weight literals are
    /// skipped and counted. A line with fewer than four quoted fields, or with
    /// a count that is not an integer, aborts the run.
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        let mut records = Vec::new();
        let mut stats = ParseStats::new();

        for (index, original_line) in text.lines().enumerate().skip(1) {
            let line_number = index + 1;
            stats.total_lines += 1;

            if let Some(reason) = self.filter.check(original_line) {
                debug!("Skipping line {} ({:?})", line_number, reason);
                stats.record_skip(reason);
                continue;
            }

            let line = original_line.replace(ESCAPED_NEWLINE, ESCAPED_NEWLINE_REPLACEMENT);
            let row = tokenize_line(&line, line_number, original_line)?;

            let format = match parse_unicode_format(&row.literal) {
                Ok(format) => format,
                Err(e) => {
                    debug!(
                        "Skipping line {}: pattern '{}' does not parse: {}",
                        line_number, row.literal, e
                    );
                    stats.record_skip(SkipReason::Unparseable);
                    continue;
                }
            };

            let weight = row.counts(line_number, original_line)?.weight(self.weight_column);
            if weight == 0 {
                debug!(
                    "Skipping line {}: {} count is zero",
                    line_number,
                    self.weight_column.name()
                );
                stats.record_skip(SkipReason::ZeroWeight);
                continue;
            }

            records.push(Record::new(format, weight));
            stats.records_parsed += 1;
        }

        info!("Pattern CSV parsed: {}", stats.summary());

        Ok(ParseResult { records, stats })
    }
}

/// Parse CSV text with default settings, keeping only the records
pub fn parse_patterns_csv(text: &str) -> Result<Vec<Record>> {
    Ok(PatternsCsvParser::default().parse_str(text)?.records)
}
