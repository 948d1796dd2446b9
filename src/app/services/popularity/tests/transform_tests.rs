//! Tests for popularity map transforms

use super::*;
use crate::app::services::popularity::{
    MapTransform, TransformPipeline, aggregate, conflate_families, sort_by_popularity, top_records,
};

#[test]
fn test_top_records_trims_and_sorts() {
    let map = aggregate(&create_sample_records());

    let trimmed = top_records(&map, 2);

    let year = trimmed.get("yyyy").unwrap();
    assert_eq!(year.count, map.get("yyyy").unwrap().count);
    assert_eq!(year.frequency, map.get("yyyy").unwrap().frequency);
    let popularities: Vec<u64> = year.contributing_records.iter().map(|r| r.popularity).collect();
    assert_eq!(popularities, vec![120, 80]);
}

#[test]
fn test_top_records_leaves_input_untouched() {
    let map = aggregate(&create_sample_records());
    let before = map.clone();

    let _ = top_records(&map, 1);

    assert_eq!(map, before);
}

#[test]
fn test_sort_by_popularity() {
    let map = aggregate(&create_sample_records());

    let sorted = sort_by_popularity(&map);

    let counts: Vec<u64> = sorted.iter().map(|(_, stats)| stats.count).collect();
    let mut expected = counts.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, expected);
    assert_eq!(sorted.len(), map.len());
}

#[test]
fn test_sort_is_idempotent() {
    let map = aggregate(&create_sample_records());

    let once = sort_by_popularity(&map);
    let twice = sort_by_popularity(&once);

    assert_eq!(once, twice);
}

#[test]
fn test_conflate_year_lengths() {
    let map = aggregate(&[create_record("yyyy-MM", 100), create_record("yy", 30)]);

    let conflated = conflate_families(&map);

    assert!(!conflated.contains("yyyy"));
    assert!(!conflated.contains("yy"));
    let year = conflated.get("y").unwrap();
    assert_eq!(
        year.count,
        map.get("yyyy").unwrap().count + map.get("yy").unwrap().count
    );
    assert_eq!(year.contributing_records.len(), 2);
    assert_eq!(conflated.keys().collect::<Vec<_>>(), vec!["y", "M"]);
}

#[test]
fn test_conflate_concatenates_without_dedup() {
    // the same record contributes to both "HH" and "H"
    let map = aggregate(&[create_record("HH H", 4)]);

    let conflated = conflate_families(&map);

    let hour = conflated.get("H").unwrap();
    assert_eq!(hour.count, 8);
    assert!((hour.frequency - 2.0).abs() < 1e-9);
    assert_eq!(hour.contributing_records.len(), 2);
}

#[test]
fn test_pipeline_applies_left_to_right() {
    let map = aggregate(&create_sample_records());

    let pipeline = TransformPipeline::default()
        .then(MapTransform::ConflateFamilies)
        .then(MapTransform::SortByPopularity)
        .then(MapTransform::TopRecords(1));

    let result = pipeline.run(&map);

    assert_eq!(pipeline.stages().len(), 3);
    assert_eq!(
        result,
        top_records(&sort_by_popularity(&conflate_families(&map)), 1)
    );
    assert!(result.iter().all(|(_, s)| s.contributing_records.len() == 1));
}

#[test]
fn test_empty_pipeline_is_identity() {
    let map = aggregate(&create_sample_records());
    assert_eq!(TransformPipeline::new(Vec::new()).run(&map), map);
}
