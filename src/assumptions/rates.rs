//! Growth rates, rule constants and recommendation thresholds

use serde::{Deserialize, Serialize};

use crate::household::{IulDesignGoal, RiskTolerance};

/// Annual growth assumptions for both vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    /// 529 portfolio return for a conservative allocation
    pub plan_a_conservative: f64,
    /// 529 portfolio return for a balanced allocation
    pub plan_a_balanced: f64,
    /// 529 portfolio return for a growth allocation
    pub plan_a_growth: f64,
    /// IUL net crediting rate, cash-focused design
    pub plan_b_cash_focused: f64,
    /// IUL net crediting rate, balanced design
    pub plan_b_balanced: f64,
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self {
            plan_a_conservative: 0.04,
            plan_a_balanced: 0.06,
            plan_a_growth: 0.08,
            plan_b_cash_focused: 0.055,
            plan_b_balanced: 0.045,
        }
    }
}

impl GrowthRates {
    /// 529 annual growth rate for the household's risk tolerance
    pub fn plan_a_rate(&self, risk: RiskTolerance) -> f64 {
        match risk {
            RiskTolerance::Conservative => self.plan_a_conservative,
            RiskTolerance::Balanced => self.plan_a_balanced,
            RiskTolerance::Growth => self.plan_a_growth,
        }
    }

    /// IUL annual crediting rate, net of policy charges
    pub fn plan_b_rate(&self, design: IulDesignGoal) -> f64 {
        match design {
            IulDesignGoal::CashFocused => self.plan_b_cash_focused,
            IulDesignGoal::Balanced => self.plan_b_balanced,
        }
    }
}

/// Fixed regulatory and modelling constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConstants {
    /// Additional tax on earnings of a non-qualified 529 withdrawal
    pub non_qualified_penalty_rate: f64,
    /// Share of starting cash value drawn each year as income
    pub income_withdrawal_rate: f64,
    /// Length of the income phase in years
    pub income_years: u32,
    /// Cash value growth during the income phase, net of loan interest
    pub income_net_growth_rate: f64,
    /// Loan-to-value ratios strictly above this are flagged
    pub loan_risk_threshold: f64,
    /// Years a 529 must be open before a Roth rollover
    pub rollover_min_account_years: u32,
    /// Maximum number of annual rollover tranches
    pub rollover_max_years: u32,
}

impl Default for RuleConstants {
    fn default() -> Self {
        Self {
            non_qualified_penalty_rate: 0.10,
            income_withdrawal_rate: 0.05,
            income_years: 20,
            income_net_growth_rate: 0.01,
            loan_risk_threshold: 0.90,
            rollover_min_account_years: 15,
            rollover_max_years: 5,
        }
    }
}

/// Cut-offs used by the recommendation classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Education probability at or above which the 529 can be primary
    pub primary_min_probability: f64,
    /// Education probability at or above which a 529-primary call is high confidence
    pub high_confidence_probability: f64,
    /// Education probability at or below which the IUL is worth considering
    pub flexible_max_probability: f64,
    /// Maximum "why" bullets per recommendation
    pub max_why: usize,
    /// Maximum considerations per recommendation
    pub max_considerations: usize,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            primary_min_probability: 75.0,
            high_confidence_probability: 90.0,
            flexible_max_probability: 50.0,
            max_why: 5,
            max_considerations: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_a_rate_by_risk() {
        let rates = GrowthRates::default();

        assert_eq!(rates.plan_a_rate(RiskTolerance::Conservative), 0.04);
        assert_eq!(rates.plan_a_rate(RiskTolerance::Balanced), 0.06);
        assert_eq!(rates.plan_a_rate(RiskTolerance::Growth), 0.08);
    }

    #[test]
    fn test_plan_b_rate_by_design() {
        let rates = GrowthRates::default();

        assert_eq!(rates.plan_b_rate(IulDesignGoal::CashFocused), 0.055);
        assert_eq!(rates.plan_b_rate(IulDesignGoal::Balanced), 0.045);
    }

    #[test]
    fn test_rule_defaults() {
        let rules = RuleConstants::default();

        assert_eq!(rules.non_qualified_penalty_rate, 0.10);
        assert_eq!(rules.income_years, 20);
        assert_eq!(rules.loan_risk_threshold, 0.90);
        assert_eq!(rules.rollover_min_account_years, 15);
        assert_eq!(rules.rollover_max_years, 5);
    }
}
