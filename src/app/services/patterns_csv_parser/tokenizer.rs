//! Quoted-field tokenizer for pattern CSV lines
//!
//! Each data line carries at least four double-quoted fields: the pattern
//! literal, the occurrence count, the file count, and the repository count.
//! Text outside quotes (separators, stray whitespace) and any further quoted
//! fields are ignored. Quote characters inside a field are not supported.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::EXPECTED_FIELD_COUNT;
use crate::error::{CensusError, Result};

/// Which count column supplies a record's popularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeightColumn {
    /// Total occurrences of the literal
    Occurrences,
    /// Number of files containing the literal
    #[default]
    Files,
    /// Number of repositories containing the literal
    Repos,
}

impl WeightColumn {
    pub fn name(&self) -> &'static str {
        match self {
            WeightColumn::Occurrences => "occurrences",
            WeightColumn::Files => "files",
            WeightColumn::Repos => "repos",
        }
    }
}

/// The four fields of a data line, counts not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub literal: String,
    pub occurrences: String,
    pub files: String,
    pub repos: String,
}

/// Validated counts of a data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts {
    pub occurrences: u64,
    pub files: u64,
    pub repos: u64,
}

impl RowCounts {
    pub fn weight(&self, column: WeightColumn) -> u64 {
        match column {
            WeightColumn::Occurrences => self.occurrences,
            WeightColumn::Files => self.files,
            WeightColumn::Repos => self.repos,
        }
    }
}

impl RawRow {
    /// Parse all three count fields; `line` and `content` locate the error
    pub fn counts(&self, line: usize, content: &str) -> Result<RowCounts> {
        Ok(RowCounts {
            occurrences: parse_count(&self.occurrences, "occurrences", line, content)?,
            files: parse_count(&self.files, "files", line, content)?,
            repos: parse_count(&self.repos, "repos", line, content)?,
        })
    }
}

fn parse_count(value: &str, column: &'static str, line: usize, content: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| CensusError::invalid_count(line, column, value, content))
}

/// Collect the contents of every complete `"..."` run on a line
pub fn split_quoted_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current: Option<String> = None;

    for c in line.chars() {
        match (c, current.as_mut()) {
            ('"', None) => current = Some(String::new()),
            ('"', Some(_)) => {
                if let Some(field) = current.take() {
                    fields.push(field);
                }
            }
            (c, Some(field)) => field.push(c),
            (_, None) => {}
        }
    }

    // an unterminated trailing quote does not form a field
    fields
}

/// Split a data line into its fixed set of fields. Fields past the fourth are
/// ignored.
pub fn tokenize_line(line: &str, line_number: usize, content: &str) -> Result<RawRow> {
    let fields = split_quoted_fields(line);
    if fields.len() < EXPECTED_FIELD_COUNT {
        return Err(CensusError::missing_fields(
            line_number,
            EXPECTED_FIELD_COUNT,
            fields.len(),
            content,
        ));
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    Ok(RawRow {
        literal: next(),
        occurrences: next(),
        files: next(),
        repos: next(),
    })
}
