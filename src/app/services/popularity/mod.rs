//! Directive popularity aggregation and report transforms
//!
//! - [`aggregator`] - Folds records into a [`PopularityMap`](crate::app::models::PopularityMap)
//! - [`transforms`] - Pure map-in/map-out steps composed into a [`TransformPipeline`]
//!
//! # Example Usage
//!
//! ```rust
//! use pattern_census::app::models::Record;
//! use pattern_census::app::services::popularity::{aggregate, MapTransform, TransformPipeline};
//! use pattern_census::app::services::unicode_format::parse_unicode_format;
//!
//! let records = vec![
//!     Record::new(parse_unicode_format("yyyy-MM").unwrap(), 100),
//!     Record::new(parse_unicode_format("yyyy").unwrap(), 50),
//! ];
//! let map = aggregate(&records);
//! assert_eq!(map.get("yyyy").unwrap().count, 150);
//!
//! let report = TransformPipeline::new(vec![MapTransform::SortByPopularity]).run(&map);
//! assert_eq!(report.keys().next(), Some("yyyy"));
//! ```

pub mod aggregator;
pub mod transforms;

#[cfg(test)]
pub mod tests;

pub use aggregator::{aggregate, frequency};
pub use transforms::{
    MapTransform, TransformPipeline, conflate_families, sort_by_popularity, top_records,
};
