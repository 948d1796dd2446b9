//! Line-level filters for non-representative pattern literals
//!
//! Templated literals and placeholder strings are expected noise in scraped
//! data; they are skipped rather than reported.

use regex::Regex;

use super::stats::SkipReason;
use crate::constants::{EMBEDDED_EXPRESSION_MARKER, PLACEHOLDER_TOKENS};
use crate::error::{CensusError, Result};

#[derive(Debug, Clone)]
pub struct RecordFilter {
    embedded_expression_marker: char,
    placeholder_tokens: Vec<String>,
    skip_patterns: Vec<Regex>,
}

impl RecordFilter {
    pub fn new(embedded_expression_marker: char, placeholder_tokens: Vec<String>) -> Self {
        Self {
            embedded_expression_marker,
            placeholder_tokens,
            skip_patterns: Vec::new(),
        }
    }

    /// Add user-supplied regular expressions; a matching line is skipped
    pub fn with_skip_patterns(mut self, patterns: &[String]) -> Result<Self> {
        for pattern in patterns {
            let regex = Regex::new(pattern).map_err(|source| CensusError::InvalidSkipPattern {
                pattern: pattern.clone(),
                source,
            })?;
            self.skip_patterns.push(regex);
        }
        Ok(self)
    }

    /// Why this line should be skipped, if it should
    pub fn check(&self, line: &str) -> Option<SkipReason> {
        if line.trim().is_empty() {
            return Some(SkipReason::Blank);
        }
        if line.contains(self.embedded_expression_marker) {
            return Some(SkipReason::EmbeddedExpression);
        }
        if self
            .placeholder_tokens
            .iter()
            .any(|token| line.contains(token.as_str()))
        {
            return Some(SkipReason::Placeholder);
        }
        if self.skip_patterns.iter().any(|regex| regex.is_match(line)) {
            return Some(SkipReason::SkipPattern);
        }
        None
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new(
            EMBEDDED_EXPRESSION_MARKER,
            PLACEHOLDER_TOKENS.iter().map(|t| t.to_string()).collect(),
        )
    }
}
