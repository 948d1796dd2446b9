//! Application constants for the pattern census
//!
//! Directive family tables, CSV layout, record filters, and pipeline defaults
//! used throughout the crate.

// =============================================================================
// Directive Families
// =============================================================================

/// Every length variant of the year field, proleptic and era-based alike.
/// Supporting one of these makes the rest nearly free.
pub const YEAR_FAMILY: &[&str] = &[
    "y", "yy", "yyy", "yyyy", "yyyyy", "u", "uu", "uuu", "uuuu", "uuuuu",
];

/// Every length variant of the fraction-of-second field
pub const FRACTION_FAMILY: &[&str] = &[
    "S",
    "SS",
    "SSS",
    "SSSS",
    "SSSSS",
    "SSSSSS",
    "SSSSSSS",
    "SSSSSSSS",
    "SSSSSSSSS",
];

/// Families adopted together by the coverage selector
pub const FREE_FAMILIES: &[&[&str]] = &[YEAR_FAMILY, FRACTION_FAMILY];

// =============================================================================
// CSV Layout
// =============================================================================

/// Quoted fields per data line: literal, occurrences, files, repos
pub const EXPECTED_FIELD_COUNT: usize = 4;

/// Escaped newline as it appears inside a scraped literal
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Replacement for escaped newlines so the literal stays on one logical field
pub const ESCAPED_NEWLINE_REPLACEMENT: &str = "\t";

// =============================================================================
// Record Filters
// =============================================================================

/// Marks a literal built with string templating rather than a static format
pub const EMBEDDED_EXPRESSION_MARKER: char = '$';

/// Tokens standing in for non-representative test strings
pub const PLACEHOLDER_TOKENS: &[&str] = &["SomeString"];

// =============================================================================
// Pipeline Defaults
// =============================================================================

/// Share of total usage the default pipeline must account for
pub const DEFAULT_COVERAGE_FRACTION: f64 = 0.99;

/// Example records kept per directive in the default report
pub const DEFAULT_TOP_RECORDS: usize = 10;

/// Config file name under the user config directory
pub const CONFIG_DIR_NAME: &str = "pattern-census";
pub const CONFIG_FILE_NAME: &str = "config.json";
