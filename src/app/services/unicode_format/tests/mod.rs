//! Tests for pattern parsing and directive classification

pub mod directive_tests;

use super::{UnicodeFormat, parse_unicode_format};

/// Parse a pattern that is known to be valid
pub fn format_of(pattern: &str) -> UnicodeFormat {
    parse_unicode_format(pattern).unwrap()
}
