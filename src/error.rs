//! Error handling for pattern census operations.
//!
//! Fatal input errors carry the offending line's position and content so the
//! scraped-data source can be fixed. Per-line noise (templated literals,
//! placeholders, unparseable patterns) never reaches this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV line {line}: expected {expected} quoted fields, found {found} - {content}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },

    #[error("Invalid {column} count on CSV line {line}: '{value}' is not an integer - {content}")]
    InvalidCount {
        line: usize,
        column: &'static str,
        value: String,
        content: String,
    },

    #[error("Invalid skip pattern '{pattern}': {source}")]
    InvalidSkipPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CensusError {
    /// Create a field-count error for a data line
    pub fn missing_fields(
        line: usize,
        expected: usize,
        found: usize,
        content: impl Into<String>,
    ) -> Self {
        Self::MissingFields {
            line,
            expected,
            found,
            content: content.into(),
        }
    }

    /// Create a non-integer count error for a data line
    pub fn invalid_count(
        line: usize,
        column: &'static str,
        value: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::InvalidCount {
            line,
            column,
            value: value.into(),
            content: content.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Line number of the offending input, if this error came from the CSV
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingFields { line, .. } | Self::InvalidCount { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CensusError>;
