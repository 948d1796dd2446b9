//! Tests for selection state transitions

use super::*;
use crate::app::services::coverage_selector::SelectionState;

#[test]
fn test_initial_weights_count_each_record_once_per_directive() {
    let records = vec![
        create_record("dd.MM.yyyy (dd)", 10),
        create_record("dd HH", 5),
    ];

    let state = SelectionState::new(&records, 15.0);

    assert_eq!(state.remaining_weight("dd"), Some(15));
    assert_eq!(state.remaining_weight("MM"), Some(10));
    assert_eq!(state.remaining_weight("HH"), Some(5));
    assert_eq!(state.remaining_directives(), 4);
    assert_eq!(state.pending_count(), 2);
    assert_eq!(state.found(), 0);
    assert!(!state.is_satisfied());
}

#[test]
fn test_heaviest_remaining_prefers_first_seen_on_ties() {
    // equal popularity keeps input order, so "MM" is seen first
    let records = vec![create_record("MM", 5), create_record("HH", 5)];
    let state = SelectionState::new(&records, 10.0);
    assert_eq!(state.heaviest_remaining(), Some("MM"));

    let records = vec![create_record("MM", 6), create_record("HH", 5), create_record("ss", 6)];
    let state = SelectionState::new(&records, 17.0);
    // ascending scan: HH(5), MM(6), ss(6)
    assert_eq!(state.heaviest_remaining(), Some("MM"));
}

#[test]
fn test_take_resolves_covered_records() {
    let records = vec![create_record("yyyy-MM", 100), create_record("yyyy", 50)];
    let mut state = SelectionState::new(&records, 75.0);

    let covered = state.take("yyyy");

    assert_eq!(covered, 50);
    assert!(state.is_taken("yyyy"));
    assert_eq!(state.remaining_weight("yyyy"), None);
    assert_eq!(state.selected(), &[records[1].clone()]);
    assert_eq!(state.pending_count(), 1);
    assert!(!state.is_satisfied());

    let covered = state.take("MM");

    assert_eq!(covered, 100);
    assert!(state.is_satisfied());
    assert_eq!(state.taken_directives(), &["yyyy".to_string(), "MM".to_string()]);
}

#[test]
fn test_taking_twice_is_harmless() {
    let records = vec![create_record("yyyy", 50)];
    let mut state = SelectionState::new(&records, 50.0);

    assert_eq!(state.take("yyyy"), 50);
    assert_eq!(state.take("yyyy"), 0);
    assert_eq!(state.taken_directives().len(), 1);
    assert_eq!(state.found(), 50);
}

#[test]
fn test_directive_free_records_resolve_on_first_scan() {
    let records = vec![create_record("'literal only'", 3)];
    let mut state = SelectionState::new(&records, 3.0);

    assert_eq!(state.heaviest_remaining(), None);
    assert_eq!(state.resolve_pending(), 3);
    assert!(state.is_satisfied());
}

#[test]
fn test_into_report() {
    let records = vec![create_record("yyyy", 50)];
    let mut state = SelectionState::new(&records, 25.0);
    state.take("yyyy");

    let report = state.into_report(50);

    assert_eq!(report.covered_weight, 50);
    assert_eq!(report.total_weight, 50);
    assert_eq!(report.coverage(), 1.0);
    assert!(report.target_reached());
}
