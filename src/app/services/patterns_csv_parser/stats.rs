//! Parsing statistics and result structures for pattern CSV processing

use serde::Serialize;

use crate::app::models::Record;

/// Why a data line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only line
    Blank,
    /// Literal is built with string templating
    EmbeddedExpression,
    /// Literal is a placeholder test string
    Placeholder,
    /// Line matched a configured skip pattern
    SkipPattern,
    /// Literal is not a valid pattern
    Unparseable,
    /// Selected count column is zero
    ZeroWeight,
}

/// Parsing result with records and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Records in input line order
    pub records: Vec<Record>,

    pub stats: ParseStats,
}

/// Per-run counters for the CSV parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Data lines seen, header excluded
    pub total_lines: usize,

    pub records_parsed: usize,

    pub skipped_blank: usize,
    pub skipped_embedded_expression: usize,
    pub skipped_placeholder: usize,
    pub skipped_by_pattern: usize,
    pub skipped_unparseable: usize,
    pub skipped_zero_weight: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a skipped line
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Blank => self.skipped_blank += 1,
            SkipReason::EmbeddedExpression => self.skipped_embedded_expression += 1,
            SkipReason::Placeholder => self.skipped_placeholder += 1,
            SkipReason::SkipPattern => self.skipped_by_pattern += 1,
            SkipReason::Unparseable => self.skipped_unparseable += 1,
            SkipReason::ZeroWeight => self.skipped_zero_weight += 1,
        }
    }

    /// Total number of lines skipped for any reason
    pub fn records_skipped(&self) -> usize {
        self.skipped_blank
            + self.skipped_embedded_expression
            + self.skipped_placeholder
            + self.skipped_by_pattern
            + self.skipped_unparseable
            + self.skipped_zero_weight
    }

    /// Parsed records as a percentage of non-blank data lines
    pub fn success_rate(&self) -> f64 {
        let candidates = self.total_lines - self.skipped_blank;
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} lines -> {} records ({:.1}%) | skipped: {} templated, {} placeholder, \
             {} by pattern, {} unparseable, {} zero weight, {} blank",
            self.total_lines,
            self.records_parsed,
            self.success_rate(),
            self.skipped_embedded_expression,
            self.skipped_placeholder,
            self.skipped_by_pattern,
            self.skipped_unparseable,
            self.skipped_zero_weight,
            self.skipped_blank
        )
    }
}
