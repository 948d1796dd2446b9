//! Tests for coverage selection

pub mod state_tests;

use crate::app::models::Record;
use crate::app::services::unicode_format::parse_unicode_format;

/// Create a record from a pattern known to parse
pub fn create_record(pattern: &str, popularity: u64) -> Record {
    Record::new(parse_unicode_format(pattern).unwrap(), popularity)
}

/// Patterns named in the coverage example: A uses year and month, B year only
pub fn create_year_month_records() -> Vec<Record> {
    vec![create_record("yyyy-MM", 100), create_record("yyyy", 50)]
}
