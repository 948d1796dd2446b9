//! Unicode date/time pattern parsing and directive extraction
//!
//! This module turns a pattern literal such as `yyyy-MM-dd'T'HH:mm:ss.SSSXXX`
//! into a [`UnicodeFormat`], lists the directives it contains, and classifies
//! each directive as date, time, or zone based.
//!
//! - [`parser`] - Pattern literal parsing with typed errors
//! - [`format`] - The parsed representation and its canonical rendering
//! - [`directive`] - Pattern letters, categories, and width limits
//!
//! ## Usage
//!
//! ```rust
//! use pattern_census::app::services::unicode_format::{classify, parse_unicode_format, DirectiveCategory};
//!
//! let format = parse_unicode_format("yyyy-MM-dd HH:mm").unwrap();
//! assert_eq!(format.directives(), vec!["yyyy", "MM", "dd", "HH", "mm"]);
//! assert_eq!(classify("HH"), DirectiveCategory::TimeBased);
//! ```

pub mod directive;
pub mod format;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use directive::{DirectiveCategory, classify};
pub use format::{FormatElement, UnicodeFormat};
pub use parser::{FormatParseError, parse_unicode_format};
