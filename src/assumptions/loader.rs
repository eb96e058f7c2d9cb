//! CSV-based assumption overrides
//!
//! Reads a two-column `key,value` file. Keys not present keep their
//! default; unknown keys are rejected so a typo never silently falls back.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use super::Assumptions;
use crate::error::{ComparisonError, Result};

/// Default file name looked up by the CLI
pub const DEFAULT_ASSUMPTIONS_FILE: &str = "data/assumptions.csv";

/// Load raw key/value overrides from a CSV file
pub fn load_overrides(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path)?;
    let overrides = load_overrides_from_reader(file)?;
    info!("Loaded {} assumption overrides from {}", overrides.len(), path.display());
    Ok(overrides)
}

/// Load raw key/value overrides from any reader
pub fn load_overrides_from_reader<R: Read>(reader: R) -> Result<HashMap<String, f64>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut overrides = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).map(str::trim).unwrap_or_default().to_string();
        let raw = record.get(1).ok_or_else(|| ComparisonError::InvalidAssumption {
            key: key.clone(),
            reason: "expected key,value".to_string(),
        })?;
        let value: f64 = raw.trim().parse().map_err(|e| ComparisonError::InvalidAssumption {
            key: key.clone(),
            reason: format!("{}", e),
        })?;
        overrides.insert(key, value);
    }

    Ok(overrides)
}

impl Assumptions {
    /// Apply a set of key/value overrides on top of the current values
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, f64>) -> Result<()> {
        // Sorted so the first reported error is stable
        let mut keys: Vec<&String> = overrides.keys().collect();
        keys.sort();

        for key in keys {
            let value = overrides[key];
            if !value.is_finite() {
                return Err(ComparisonError::InvalidAssumption {
                    key: key.clone(),
                    reason: "value must be finite".to_string(),
                });
            }

            match key.as_str() {
                "plan_a_conservative" => self.rates.plan_a_conservative = value,
                "plan_a_balanced" => self.rates.plan_a_balanced = value,
                "plan_a_growth" => self.rates.plan_a_growth = value,
                "plan_b_cash_focused" => self.rates.plan_b_cash_focused = value,
                "plan_b_balanced" => self.rates.plan_b_balanced = value,
                "non_qualified_penalty_rate" => self.rules.non_qualified_penalty_rate = fraction(key, value)?,
                "income_withdrawal_rate" => self.rules.income_withdrawal_rate = fraction(key, value)?,
                "income_years" => self.rules.income_years = whole(key, value)?,
                "income_net_growth_rate" => self.rules.income_net_growth_rate = value,
                "loan_risk_threshold" => self.rules.loan_risk_threshold = fraction(key, value)?,
                "rollover_min_account_years" => self.rules.rollover_min_account_years = whole(key, value)?,
                "rollover_max_years" => self.rules.rollover_max_years = whole(key, value)?,
                "primary_min_probability" => self.thresholds.primary_min_probability = value,
                "high_confidence_probability" => self.thresholds.high_confidence_probability = value,
                "flexible_max_probability" => self.thresholds.flexible_max_probability = value,
                "max_why" => self.thresholds.max_why = whole(key, value)? as usize,
                "max_considerations" => self.thresholds.max_considerations = whole(key, value)? as usize,
                _ => return Err(ComparisonError::UnknownAssumption(key.clone())),
            }
        }

        Ok(())
    }
}

fn fraction(key: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ComparisonError::InvalidAssumption {
            key: key.to_string(),
            reason: format!("{} is outside [0, 1]", value),
        })
    }
}

fn whole(key: &str, value: f64) -> Result<u32> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(ComparisonError::InvalidAssumption {
            key: key.to_string(),
            reason: format!("{} is not a non-negative whole number", value),
        })
    }
}
