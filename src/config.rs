//! Configuration management and validation.
//!
//! Provides configuration structures for CSV record filtering, coverage
//! selection, and report shaping. Configuration is read from a JSON file and
//! every section falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::patterns_csv_parser::WeightColumn;
use crate::app::services::popularity::MapTransform;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COVERAGE_FRACTION, DEFAULT_TOP_RECORDS,
    EMBEDDED_EXPRESSION_MARKER, PLACEHOLDER_TOKENS,
};
use crate::error::{CensusError, Result};

/// How data lines are read and filtered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Count column used as record popularity
    pub weight_column: WeightColumn,

    /// Character marking a templated literal
    pub embedded_expression_marker: char,

    /// Literal fragments identifying placeholder test strings
    pub placeholder_tokens: Vec<String>,

    /// Extra regular expressions; matching lines are skipped
    pub skip_patterns: Vec<String>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            weight_column: WeightColumn::Files,
            embedded_expression_marker: EMBEDDED_EXPRESSION_MARKER,
            placeholder_tokens: PLACEHOLDER_TOKENS.iter().map(|t| t.to_string()).collect(),
            skip_patterns: Vec::new(),
        }
    }
}

/// Greedy coverage selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Share of usage to cover; `None` analyzes every record
    pub coverage_fraction: Option<f64>,

    /// Directive families adopted together, in addition to year and fraction lengths
    pub extra_families: Vec<Vec<String>>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            coverage_fraction: Some(DEFAULT_COVERAGE_FRACTION),
            extra_families: Vec::new(),
        }
    }
}

/// Shape of the final popularity map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Transforms applied to the aggregated map, in order
    pub transforms: Vec<MapTransform>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            transforms: vec![
                MapTransform::TopRecords(DEFAULT_TOP_RECORDS),
                MapTransform::SortByPopularity,
            ],
        }
    }
}

/// Global configuration for a census run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    pub csv: CsvConfig,
    pub selection: SelectionConfig,
    pub report: ReportConfig,
}

impl CensusConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CensusConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the user's config file if one exists, defaults otherwise
    pub fn load_or_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(fraction) = self.selection.coverage_fraction {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(CensusError::configuration(format!(
                    "Coverage fraction must be in (0, 1], got {}",
                    fraction
                )));
            }
        }

        if self
            .csv
            .placeholder_tokens
            .iter()
            .any(|token| token.is_empty())
        {
            return Err(CensusError::configuration(
                "Placeholder tokens cannot be empty",
            ));
        }

        for pattern in &self.csv.skip_patterns {
            regex::Regex::new(pattern).map_err(|source| CensusError::InvalidSkipPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        for family in &self.selection.extra_families {
            if family.is_empty() || family.iter().any(|directive| directive.is_empty()) {
                return Err(CensusError::configuration(
                    "Directive families must list at least one non-empty directive",
                ));
            }
        }

        for transform in &self.report.transforms {
            if let MapTransform::TopRecords(0) = transform {
                return Err(CensusError::configuration(
                    "TopRecords must keep at least one record",
                ));
            }
        }

        Ok(())
    }

    /// Select records covering `fraction` of total usage
    pub fn with_coverage_fraction(mut self, fraction: f64) -> Self {
        self.selection.coverage_fraction = Some(fraction);
        self
    }

    /// Analyze every record without coverage selection
    pub fn without_selection(mut self) -> Self {
        self.selection.coverage_fraction = None;
        self
    }

    /// Replace the report transforms
    pub fn with_transforms(mut self, transforms: Vec<MapTransform>) -> Self {
        self.report.transforms = transforms;
        self
    }

    /// Use a different count column as popularity
    pub fn with_weight_column(mut self, column: WeightColumn) -> Self {
        self.csv.weight_column = column;
        self
    }
}

/// `<config dir>/pattern-census/config.json`, when a config dir is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
