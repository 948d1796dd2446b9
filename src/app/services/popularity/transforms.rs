//! Composable transforms over popularity maps
//!
//! Every transform reads its input map and returns a new one; the input is
//! never modified.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::app::models::{DirectiveStats, PopularityMap, Record};

/// A single pure `PopularityMap -> PopularityMap` step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapTransform {
    /// Keep the n most popular contributing records per directive
    TopRecords(usize),
    /// Order entries by descending count
    SortByPopularity,
    /// Merge directives sharing a leading letter into one key per letter
    ConflateFamilies,
}

impl MapTransform {
    pub fn apply(&self, map: &PopularityMap) -> PopularityMap {
        match self {
            MapTransform::TopRecords(n) => top_records(map, *n),
            MapTransform::SortByPopularity => sort_by_popularity(map),
            MapTransform::ConflateFamilies => conflate_families(map),
        }
    }
}

/// Transforms applied left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformPipeline {
    stages: Vec<MapTransform>,
}

impl TransformPipeline {
    pub fn new(stages: Vec<MapTransform>) -> Self {
        Self { stages }
    }

    pub fn then(mut self, stage: MapTransform) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[MapTransform] {
        &self.stages
    }

    pub fn run(&self, map: &PopularityMap) -> PopularityMap {
        let mut current = map.clone();
        for stage in &self.stages {
            debug!("Applying {:?} to {} directives", stage, current.len());
            current = stage.apply(&current);
        }
        current
    }
}

/// Trim each directive's contributing records to the `n` most popular,
/// sorted descending. Counts and frequencies are left untouched.
pub fn top_records(map: &PopularityMap, n: usize) -> PopularityMap {
    map.iter()
        .map(|(directive, stats)| {
            let mut records = stats.contributing_records.clone();
            records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
            records.truncate(n);
            (
                directive.to_string(),
                DirectiveStats::new(stats.count, stats.frequency, records),
            )
        })
        .collect()
}

/// Reorder entries by descending count; equal counts keep their order
pub fn sort_by_popularity(map: &PopularityMap) -> PopularityMap {
    let mut entries: Vec<(&str, &DirectiveStats)> = map.iter().collect();
    entries.sort_by(|a, b| b.1.count.cmp(&a.1.count));
    entries
        .into_iter()
        .map(|(directive, stats)| (directive.to_string(), stats.clone()))
        .collect()
}

/// Group directives by leading character into one synthetic key per group.
///
/// Counts and frequencies are summed and record lists concatenated without
/// deduplication. Groups appear in order of their first member.
pub fn conflate_families(map: &PopularityMap) -> PopularityMap {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (u64, f64, Vec<Record>)> = HashMap::new();

    for (directive, stats) in map.iter() {
        let family: String = directive.chars().take(1).collect();
        let group = groups.entry(family.clone()).or_insert_with(|| {
            order.push(family);
            (0, 0.0, Vec::new())
        });
        group.0 += stats.count;
        group.1 += stats.frequency;
        group.2.extend(stats.contributing_records.iter().cloned());
    }

    order
        .into_iter()
        .filter_map(|family| {
            groups.remove(&family).map(|(count, frequency, records)| {
                (family, DirectiveStats::new(count, frequency, records))
            })
        })
        .collect()
}
