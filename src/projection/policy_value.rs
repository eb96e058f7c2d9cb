//! IUL cash value access and income-phase projection

use serde::{Deserialize, Serialize};

use crate::assumptions::RuleConstants;
use crate::format::format_percentage;

/// Loan capacity against the policy's cash value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyAccess {
    pub accessible: f64,
    pub loan_risk_flag: bool,
}

/// Static loan capacity under a loan-to-value ceiling
///
/// Reports capacity only; there is no amortized loan balance.
pub fn policy_access(cash_value: f64, max_loan_to_value: f64, rules: &RuleConstants) -> PolicyAccess {
    PolicyAccess {
        accessible: (cash_value * max_loan_to_value).max(0.0),
        loan_risk_flag: max_loan_to_value > rules.loan_risk_threshold,
    }
}

/// Income stream drawn from the policy after the goal date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfiniteBankingResult {
    pub starting_cash_value: f64,
    pub withdrawal_rate: f64,
    pub annual_income: f64,
    pub income_years: u32,
    pub total_income: f64,
    /// Cash value at the end of the income phase
    pub ending_cash_value: f64,
    /// A 529 cannot fund the same stream without tax and penalty
    pub plan_a_can_replicate: bool,
    pub plan_a_limitation: String,
}

/// Project a level income stream from a starting cash value
///
/// Income is a fixed share of the starting value each year. The cash value
/// keeps compounding annually at the net growth rate (growth net of loan
/// interest) over the same span.
pub fn project_income(starting_cash_value: f64, rules: &RuleConstants) -> InfiniteBankingResult {
    let start = starting_cash_value.max(0.0);
    let annual_income = start * rules.income_withdrawal_rate;
    let years = rules.income_years;

    InfiniteBankingResult {
        starting_cash_value: start,
        withdrawal_rate: rules.income_withdrawal_rate,
        annual_income,
        income_years: years,
        total_income: annual_income * years as f64,
        ending_cash_value: start * (1.0 + rules.income_net_growth_rate).powi(years as i32),
        plan_a_can_replicate: false,
        plan_a_limitation: format!(
            "529 withdrawals for non-education purposes are subject to income tax plus a {} penalty on earnings",
            format_percentage(rules.non_qualified_penalty_rate, 0)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_loan_risk_boundary() {
        let rules = RuleConstants::default();

        assert!(!policy_access(100_000.0, 0.90, &rules).loan_risk_flag);
        assert!(policy_access(100_000.0, 0.901, &rules).loan_risk_flag);
    }

    #[test]
    fn test_accessible_value() {
        let rules = RuleConstants::default();
        let access = policy_access(80_000.0, 0.75, &rules);

        assert_eq!(access.accessible, 60_000.0);
        assert!(!access.loan_risk_flag);
    }

    #[test]
    fn test_income_projection_defaults() {
        let rules = RuleConstants::default();
        let result = project_income(200_000.0, &rules);

        assert_eq!(result.annual_income, 10_000.0);
        assert_eq!(result.income_years, 20);
        assert_eq!(result.total_income, 200_000.0);
        assert_abs_diff_eq!(result.ending_cash_value, 200_000.0 * 1.01_f64.powi(20), epsilon = 1e-6);
        assert!(!result.plan_a_can_replicate);
        assert_eq!(
            result.plan_a_limitation,
            "529 withdrawals for non-education purposes are subject to income tax plus a 10% penalty on earnings"
        );
    }

    #[test]
    fn test_income_projection_overridden_rules() {
        let rules = RuleConstants {
            income_withdrawal_rate: 0.04,
            income_years: 10,
            income_net_growth_rate: 0.0,
            ..RuleConstants::default()
        };
        let result = project_income(50_000.0, &rules);

        assert_eq!(result.annual_income, 2_000.0);
        assert_eq!(result.total_income, 20_000.0);
        assert_eq!(result.ending_cash_value, 50_000.0);
    }
}
