//! Per-directive popularity aggregation
//!
//! Each record adds its popularity once to every distinct directive in its
//! format. A directive repeated within one pattern counts once. Records with
//! equal formats are merged into a single contributing entry whose popularity
//! is the sum, so counts still conserve every record's weight.

use std::collections::HashMap;
use tracing::{debug, info};

use crate::app::models::{DirectiveStats, PopularityMap, Record, total_popularity};
use crate::app::services::unicode_format::UnicodeFormat;

/// Contributing records of one directive, one entry per distinct format
#[derive(Default)]
struct Contributors {
    records: Vec<Record>,
    positions: HashMap<UnicodeFormat, usize>,
}

impl Contributors {
    fn add(&mut self, record: &Record) {
        match self.positions.get(&record.format) {
            Some(&position) => self.records[position].popularity += record.popularity,
            None => {
                self.positions
                    .insert(record.format.clone(), self.records.len());
                self.records.push(record.clone());
            }
        }
    }
}

/// Fold records into a per-directive popularity map
pub fn aggregate(records: &[Record]) -> PopularityMap {
    let total = total_popularity(records);

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut contributors: HashMap<String, Contributors> = HashMap::new();

    for record in records {
        for directive in record.distinct_directives() {
            let count = counts.entry(directive.clone()).or_insert_with(|| {
                order.push(directive.clone());
                0
            });
            *count += record.popularity;

            contributors.entry(directive).or_default().add(record);
        }
    }

    let map: PopularityMap = order
        .into_iter()
        .map(|directive| {
            let count = counts.get(&directive).copied().unwrap_or(0);
            let records = contributors
                .remove(&directive)
                .map(|listed| listed.records)
                .unwrap_or_default();
            let stats = DirectiveStats::new(count, frequency(count, total), records);
            (directive, stats)
        })
        .collect();

    debug!(
        "Aggregated {} records (total popularity {}) into {} directives",
        records.len(),
        total,
        map.len()
    );
    info!("Popularity map built with {} directives", map.len());

    map
}

/// Share of `total` represented by `count`; zero when there is no usage at all
pub fn frequency(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
