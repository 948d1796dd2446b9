//! Coverage selection over pattern records
//!
//! Determines the smallest set of directives, picked greedily by uncovered
//! weight, whose fully supported records make up a target share of total
//! usage. Year-length and fraction-of-second-length variants are adopted as
//! a group once any member is picked.
//!
//! - [`selector`] - The greedy loop
//! - [`state`] - Explicit working state and the selection report
//! - [`bundles`] - Free directive families
//!
//! # Example Usage
//!
//! ```rust
//! use pattern_census::app::models::Record;
//! use pattern_census::app::services::coverage_selector::select_for_fraction;
//! use pattern_census::app::services::unicode_format::parse_unicode_format;
//!
//! let records = vec![
//!     Record::new(parse_unicode_format("yyyy-MM").unwrap(), 100),
//!     Record::new(parse_unicode_format("yyyy").unwrap(), 50),
//! ];
//! let selected = select_for_fraction(&records, 0.5);
//! assert!(selected.contains(&records[0]));
//! ```

pub mod bundles;
pub mod selector;
pub mod state;

#[cfg(test)]
pub mod tests;

pub use bundles::{BundleTable, DirectiveFamily};
pub use selector::{CoverageSelector, select_for_fraction};
pub use state::{SelectionReport, SelectionState};
