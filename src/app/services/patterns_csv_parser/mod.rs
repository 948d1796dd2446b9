//! Parser for harvested date/time pattern CSV files
//!
//! The input is a header line followed by data lines of four quoted fields:
//! pattern literal, occurrence count, file count, and repository count.
//!
//! ## Architecture
//!
//! - [`parser`] - Line loop, skip accounting, and record construction
//! - [`tokenizer`] - Fixed-arity quoted-field extraction and count validation
//! - [`record_filter`] - Templated, placeholder, and user-pattern filters
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use pattern_census::app::services::patterns_csv_parser::PatternsCsvParser;
//!
//! let csv = "pattern,occurrences,files,repos\n\"yyyy-MM-dd\",\"40\",\"12\",\"3\"\n";
//! let result = PatternsCsvParser::default().parse_str(csv).unwrap();
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].popularity, 12);
//! ```

pub mod parser;
pub mod record_filter;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use parser::{PatternsCsvParser, parse_patterns_csv};
pub use record_filter::RecordFilter;
pub use stats::{ParseResult, ParseStats, SkipReason};
pub use tokenizer::{RawRow, RowCounts, WeightColumn};
