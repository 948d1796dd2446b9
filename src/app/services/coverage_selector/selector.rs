//! Greedy weighted set cover with free bundling
//!
//! Repeatedly take the directive with the most uncovered weight, together
//! with its free family, until the selected records account for the
//! requested share of total popularity.

use tracing::{debug, info, warn};

use super::bundles::{BundleTable, DirectiveFamily};
use super::state::{SelectionReport, SelectionState};
use crate::app::models::{Record, total_popularity};
use crate::config::SelectionConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageSelector {
    bundles: BundleTable,
}

impl CoverageSelector {
    pub fn new(bundles: BundleTable) -> Self {
        Self { bundles }
    }

    /// Standard families plus any configured extras
    pub fn from_config(config: &SelectionConfig) -> Self {
        let bundles = config
            .extra_families
            .iter()
            .fold(BundleTable::standard(), |table, family| {
                table.with_family(DirectiveFamily::new(family.iter().cloned()))
            });
        Self::new(bundles)
    }

    pub fn bundles(&self) -> &BundleTable {
        &self.bundles
    }

    /// Records needed to cover `fraction` of total usage, in resolution order
    pub fn select_for_fraction(&self, records: &[Record], fraction: f64) -> Vec<Record> {
        self.select_with_report(records, fraction).selected
    }

    /// Run the selection and keep the taken directives and weights
    pub fn select_with_report(&self, records: &[Record], fraction: f64) -> SelectionReport {
        let total = total_popularity(records);
        // also rejects NaN
        if !(fraction > 0.0) {
            debug!("Coverage fraction {} selects nothing", fraction);
            return SelectionReport::empty(total);
        }

        let mut state = SelectionState::new(records, total as f64 * fraction);

        while !state.is_satisfied() {
            let Some(chosen) = state.heaviest_remaining().map(str::to_string) else {
                // directive-free records are still waiting on a scan
                state.resolve_pending();
                if !state.is_satisfied() {
                    warn!(
                        "Coverage target {:.1} unreachable: all directives taken, {} covered",
                        state.target(),
                        state.found()
                    );
                }
                break;
            };

            let bundle = self.bundles.free_bundle(&chosen);
            let mut covered = 0;
            for directive in &bundle {
                covered += state.take(directive);
            }

            debug!(
                "Took '{}' with {} free directives: +{} weight ({} / {:.1}), {} records pending",
                chosen,
                bundle.len() - 1,
                covered,
                state.found(),
                state.target(),
                state.pending_count()
            );
        }

        let report = state.into_report(total);
        info!(
            "Coverage selection: {} of {} records, {} directives, {:.1}% of weight",
            report.selected.len(),
            records.len(),
            report.taken_directives.len(),
            report.coverage() * 100.0
        );
        report
    }
}

/// Select with the standard free families
pub fn select_for_fraction(records: &[Record], fraction: f64) -> Vec<Record> {
    CoverageSelector::default().select_for_fraction(records, fraction)
}
