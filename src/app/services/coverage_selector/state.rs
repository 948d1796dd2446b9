//! Working state of the greedy coverage selection
//!
//! All mutation of the selection happens through [`SelectionState`] so each
//! transition (take a directive, resolve covered records) can be exercised on
//! its own.

use serde::Serialize;
use std::collections::HashSet;

use crate::app::models::Record;

/// A record waiting for all of its directives to be taken
#[derive(Debug, Clone)]
struct PendingRecord {
    record: Record,
    directives: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Uncovered weight per directive, in first-seen order
    remaining: Vec<(String, u64)>,
    taken: HashSet<String>,
    taken_order: Vec<String>,
    /// Scan order: ascending popularity, ties in input order
    pending: Vec<PendingRecord>,
    selected: Vec<Record>,
    found: u64,
    target: f64,
}

impl SelectionState {
    pub fn new(records: &[Record], target: f64) -> Self {
        let mut pending: Vec<PendingRecord> = records
            .iter()
            .map(|record| PendingRecord {
                record: record.clone(),
                directives: record.distinct_directives().into_iter().collect(),
            })
            .collect();
        pending.sort_by_key(|p| p.record.popularity);

        let mut remaining: Vec<(String, u64)> = Vec::new();
        for p in &pending {
            for directive in p.record.distinct_directives() {
                match remaining.iter_mut().find(|(known, _)| *known == directive) {
                    Some((_, weight)) => *weight += p.record.popularity,
                    None => remaining.push((directive, p.record.popularity)),
                }
            }
        }

        Self {
            remaining,
            taken: HashSet::new(),
            taken_order: Vec::new(),
            pending,
            selected: Vec::new(),
            found: 0,
            target,
        }
    }

    /// Whether the covered weight has reached the target
    pub fn is_satisfied(&self) -> bool {
        self.found as f64 >= self.target
    }

    /// Directive with the largest uncovered weight; the first one wins ties
    pub fn heaviest_remaining(&self) -> Option<&str> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.remaining {
            if best.is_none_or(|current| entry.1 > current.1) {
                best = Some(entry);
            }
        }
        best.map(|(directive, _)| directive.as_str())
    }

    /// Mark a directive as taken and resolve every pending record it
    /// completes. Returns the weight newly covered.
    pub fn take(&mut self, directive: &str) -> u64 {
        self.remaining.retain(|(known, _)| known != directive);
        if self.taken.insert(directive.to_string()) {
            self.taken_order.push(directive.to_string());
        }
        self.resolve_pending()
    }

    /// Move every pending record whose directives are all taken into the
    /// selection, in scan order
    pub fn resolve_pending(&mut self) -> u64 {
        let mut covered = 0;
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for p in std::mem::take(&mut self.pending) {
            if p.directives.is_subset(&self.taken) {
                covered += p.record.popularity;
                self.selected.push(p.record);
            } else {
                still_pending.push(p);
            }
        }

        self.pending = still_pending;
        self.found += covered;
        covered
    }

    pub fn found(&self) -> u64 {
        self.found
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn remaining_weight(&self, directive: &str) -> Option<u64> {
        self.remaining
            .iter()
            .find(|(known, _)| known == directive)
            .map(|(_, weight)| *weight)
    }

    pub fn remaining_directives(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_taken(&self, directive: &str) -> bool {
        self.taken.contains(directive)
    }

    pub fn taken_directives(&self) -> &[String] {
        &self.taken_order
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn selected(&self) -> &[Record] {
        &self.selected
    }

    pub fn into_report(self, total_weight: u64) -> SelectionReport {
        SelectionReport {
            selected: self.selected,
            taken_directives: self.taken_order,
            covered_weight: self.found,
            total_weight,
            target_weight: self.target,
        }
    }
}

/// Outcome of a coverage selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    /// Selected records in the order they were resolved
    pub selected: Vec<Record>,
    /// Directives taken, bundle members included, in order
    pub taken_directives: Vec<String>,
    pub covered_weight: u64,
    pub total_weight: u64,
    pub target_weight: f64,
}

impl SelectionReport {
    /// A selection that took nothing
    pub fn empty(total_weight: u64) -> Self {
        Self {
            selected: Vec::new(),
            taken_directives: Vec::new(),
            covered_weight: 0,
            total_weight,
            target_weight: 0.0,
        }
    }

    /// Covered share of total weight
    pub fn coverage(&self) -> f64 {
        if self.total_weight == 0 {
            0.0
        } else {
            self.covered_weight as f64 / self.total_weight as f64
        }
    }

    pub fn target_reached(&self) -> bool {
        self.covered_weight as f64 >= self.target_weight
    }
}
