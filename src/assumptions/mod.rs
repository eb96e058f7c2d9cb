//! Comparison assumptions: growth rates, rule constants and thresholds

mod rates;
mod snapshot;
pub mod loader;

pub use rates::{GrowthRates, RecommendationThresholds, RuleConstants};
pub use snapshot::AssumptionsSnapshot;
pub use loader::{load_overrides, load_overrides_from_reader, DEFAULT_ASSUMPTIONS_FILE};

use std::path::Path;

use crate::error::Result;

/// Container for all comparison assumptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assumptions {
    pub rates: GrowthRates,
    pub rules: RuleConstants,
    pub thresholds: RecommendationThresholds,
}

impl Assumptions {
    /// Default rates and current-law rule constants
    pub fn default_rules() -> Self {
        Self::default()
    }

    /// Defaults with overrides from a `key,value` CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let overrides = load_overrides(path)?;
        let mut assumptions = Self::default_rules();
        assumptions.apply_overrides(&overrides)?;
        Ok(assumptions)
    }
}
