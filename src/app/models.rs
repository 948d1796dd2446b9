//! Core data models for the pattern census
//!
//! Records are created once by the CSV parser and never mutated. Every
//! pipeline stage that produces a [`PopularityMap`] builds a fresh one.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::app::services::unicode_format::UnicodeFormat;

/// One parsed pattern and the number of times it was observed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub format: UnicodeFormat,
    pub popularity: u64,
}

impl Record {
    pub fn new(format: UnicodeFormat, popularity: u64) -> Self {
        Self { format, popularity }
    }

    /// Directives in this record's format, each listed once
    pub fn distinct_directives(&self) -> Vec<String> {
        self.format.distinct_directives()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.format, self.popularity)
    }
}

/// Sum of popularity over a record list
pub fn total_popularity(records: &[Record]) -> u64 {
    records.iter().map(|record| record.popularity).sum()
}

/// Usage statistics for a single directive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectiveStats {
    /// Summed popularity of records that contain the directive
    pub count: u64,
    /// Share of total popularity; shares overlap across directives
    pub frequency: f64,
    /// Records that contain the directive, one entry per format
    pub contributing_records: Vec<Record>,
}

impl DirectiveStats {
    pub fn new(count: u64, frequency: f64, contributing_records: Vec<Record>) -> Self {
        Self {
            count,
            frequency,
            contributing_records,
        }
    }
}

/// A directive key and its statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectiveEntry {
    pub directive: String,
    #[serde(flatten)]
    pub stats: DirectiveStats,
}

/// Directive statistics keyed by directive identifier
///
/// Entries keep the order they were inserted in. That order carries no meaning
/// until a sorting transform runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopularityMap {
    entries: Vec<DirectiveEntry>,
    index: HashMap<String, usize>,
}

impl PopularityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the statistics for a directive. A replaced entry
    /// keeps its position.
    pub fn insert(&mut self, directive: impl Into<String>, stats: DirectiveStats) {
        let directive = directive.into();
        match self.index.get(&directive) {
            Some(&position) => self.entries[position].stats = stats,
            None => {
                self.index.insert(directive.clone(), self.entries.len());
                self.entries.push(DirectiveEntry { directive, stats });
            }
        }
    }

    pub fn get(&self, directive: &str) -> Option<&DirectiveStats> {
        self.index
            .get(directive)
            .map(|&position| &self.entries[position].stats)
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.index.contains_key(directive)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.directive.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectiveStats)> {
        self.entries
            .iter()
            .map(|entry| (entry.directive.as_str(), &entry.stats))
    }
}

impl FromIterator<(String, DirectiveStats)> for PopularityMap {
    fn from_iter<I: IntoIterator<Item = (String, DirectiveStats)>>(iter: I) -> Self {
        let mut map = PopularityMap::new();
        for (directive, stats) in iter {
            map.insert(directive, stats);
        }
        map
    }
}

impl IntoIterator for PopularityMap {
    type Item = (String, DirectiveStats);
    type IntoIter = std::iter::Map<
        std::vec::IntoIter<DirectiveEntry>,
        fn(DirectiveEntry) -> (String, DirectiveStats),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn split(entry: DirectiveEntry) -> (String, DirectiveStats) {
            (entry.directive, entry.stats)
        }
        self.entries.into_iter().map(split as fn(_) -> _)
    }
}

impl Serialize for PopularityMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
