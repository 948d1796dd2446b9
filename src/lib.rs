//! Pattern Census Library
//!
//! Analyzes a corpus of date/time formatting patterns harvested from real
//! source code to find which formatting directives are used most, and which
//! minimal set of directives covers a target share of real-world usage.
//!
//! This library provides tools for:
//! - Parsing harvested pattern CSV files into typed records
//! - Parsing Unicode date/time patterns and classifying their directives
//! - Aggregating popularity per directive
//! - Shaping popularity maps with composable transforms
//! - Greedy coverage selection with free directive families
//! - Detecting patterns that interleave date, time, and zone directives

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod coverage_selector;
        pub mod mingling;
        pub mod pattern_map;
        pub mod patterns_csv_parser;
        pub mod popularity;
        pub mod unicode_format;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DirectiveStats, PopularityMap, Record};
pub use app::services::pattern_map::{CensusOutcome, build_default_pattern_map, build_pattern_map};
pub use config::CensusConfig;
pub use error::{CensusError, Result};
