//! Tests for popularity aggregation and map transforms

pub mod transform_tests;

use crate::app::models::Record;
use crate::app::services::unicode_format::parse_unicode_format;

/// Create a record from a pattern known to parse
pub fn create_record(pattern: &str, popularity: u64) -> Record {
    Record::new(parse_unicode_format(pattern).unwrap(), popularity)
}

/// A small corpus mixing date, time, and zone directives
pub fn create_sample_records() -> Vec<Record> {
    vec![
        create_record("yyyy-MM-dd", 120),
        create_record("yyyy-MM-dd HH:mm:ss", 80),
        create_record("dd/MM/yy", 40),
        create_record("HH:mm", 30),
        create_record("yyyy-MM-dd'T'HH:mm:ss.SSSXXX", 20),
        create_record("dd.MM.yyyy (dd)", 10),
    ]
}
