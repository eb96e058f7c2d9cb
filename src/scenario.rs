//! Scenario runner for batch and multi-assumption comparisons
//!
//! Holds one base assumption set and fans work out across households or
//! assumption variants. Every comparison is independent, so batches run
//! in parallel.

use log::info;
use rayon::prelude::*;

use crate::household::{Household, RiskTolerance};
use crate::projection::{ComparisonEngine, ComparisonResult};
use crate::Assumptions;

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("data/assumptions.csv"))?;
///
/// for result in runner.run_batch(&households) {
///     println!("{}", result.recommendation.summary);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with default assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_rules(),
        }
    }

    /// Create runner from an assumption override file
    pub fn from_csv_path(path: &std::path::Path) -> crate::error::Result<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Compare a single household
    pub fn run(&self, household: &Household) -> ComparisonResult {
        ComparisonEngine::new(self.base_assumptions.clone()).compare(household)
    }

    /// Compare many households under the base assumptions, preserving order
    pub fn run_batch(&self, households: &[Household]) -> Vec<ComparisonResult> {
        info!("Running {} household comparisons", households.len());
        let engine = ComparisonEngine::new(self.base_assumptions.clone());
        households.par_iter().map(|h| engine.compare(h)).collect()
    }

    /// Compare one household under several assumption sets
    pub fn run_scenarios(&self, household: &Household, scenarios: &[Assumptions]) -> Vec<ComparisonResult> {
        scenarios
            .par_iter()
            .map(|assumptions| ComparisonEngine::new(assumptions.clone()).compare(household))
            .collect()
    }

    /// Compare one household under each risk tolerance
    pub fn run_risk_profiles(&self, household: &Household) -> Vec<(RiskTolerance, ComparisonResult)> {
        let engine = ComparisonEngine::new(self.base_assumptions.clone());
        RiskTolerance::ALL
            .iter()
            .map(|&risk| {
                let variant = Household {
                    risk_tolerance: risk,
                    ..household.clone()
                };
                (risk, engine.compare(&variant))
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::sample_household;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let households: Vec<_> = [100.0, 200.0, 300.0, 400.0]
            .iter()
            .map(|&monthly| Household {
                monthly_contribution: monthly,
                ..sample_household()
            })
            .collect();

        let results = runner.run_batch(&households);
        assert_eq!(results.len(), 4);
        for (household, result) in households.iter().zip(&results) {
            assert_eq!(result, &runner.run(household));
        }
        assert!(results.windows(2).all(|w| w[1].fv529_gross > w[0].fv529_gross));
    }

    #[test]
    fn test_risk_profiles_order_by_growth() {
        let runner = ScenarioRunner::new();
        let results = runner.run_risk_profiles(&sample_household());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, RiskTolerance::Conservative);
        // Higher growth assumption should give a higher 529 balance
        assert!(results[2].1.fv529_gross > results[1].1.fv529_gross);
        assert!(results[1].1.fv529_gross > results[0].1.fv529_gross);
    }

    #[test]
    fn test_scenarios_apply_each_assumption_set() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = [0.05, 0.10, 0.20]
            .iter()
            .map(|&penalty| {
                let mut a = Assumptions::default_rules();
                a.rules.non_qualified_penalty_rate = penalty;
                a
            })
            .collect();

        let results = runner.run_scenarios(&sample_household(), &scenarios);
        assert_eq!(results.len(), 3);
        assert!(results[0].fv529_non_qualified_net > results[1].fv529_non_qualified_net);
        assert!(results[1].fv529_non_qualified_net > results[2].fv529_non_qualified_net);
    }

    #[test]
    fn test_mutable_assumptions() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().rules.income_years = 10;

        let result = runner.run(&sample_household());
        assert_eq!(result.infinite_banking.income_years, 10);
        assert_eq!(runner.assumptions().rules.income_years, 10);
    }
}
