//! Audit record of every rate and constant used in a comparison

use serde::{Deserialize, Serialize};

use super::Assumptions;
use crate::household::{Household, IulDesignGoal, RiskTolerance};

/// Every assumption that influenced one comparison result
///
/// Re-running the engine with the household and these values reproduces
/// the result exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionsSnapshot {
    pub risk_tolerance: RiskTolerance,
    pub plan_a_growth_rate: f64,
    pub iul_design_goal: IulDesignGoal,
    pub plan_b_growth_rate: f64,
    pub years_to_goal: u32,
    pub inflation_rate: f64,

    pub federal_tax_bracket: f64,
    pub non_qualified_penalty_rate: f64,
    pub state_tax_benefit_enabled: bool,
    pub state_tax_benefit_annual: f64,
    pub percent_used_for_education: f64,

    pub rollover_enabled: bool,
    pub rollover_min_account_years: u32,
    pub rollover_max_years: u32,
    pub roth_rollover_limit: f64,
    pub annual_roth_limit: f64,

    pub max_loan_to_value_ratio: f64,
    pub loan_risk_threshold: f64,
    pub mec_risk_guard: bool,

    pub income_withdrawal_rate: f64,
    pub income_years: u32,
    pub income_net_growth_rate: f64,

    pub primary_min_probability: f64,
    pub high_confidence_probability: f64,
    pub flexible_max_probability: f64,
    pub max_why: usize,
    pub max_considerations: usize,
}

impl AssumptionsSnapshot {
    pub fn capture(household: &Household, assumptions: &Assumptions) -> Self {
        let rules = &assumptions.rules;
        let thresholds = &assumptions.thresholds;

        Self {
            risk_tolerance: household.risk_tolerance,
            plan_a_growth_rate: assumptions.rates.plan_a_rate(household.risk_tolerance),
            iul_design_goal: household.iul_design_goal,
            plan_b_growth_rate: assumptions.rates.plan_b_rate(household.iul_design_goal),
            years_to_goal: household.years_to_goal,
            inflation_rate: household.inflation_assumption,
            federal_tax_bracket: household.federal_tax_bracket,
            non_qualified_penalty_rate: rules.non_qualified_penalty_rate,
            state_tax_benefit_enabled: household.state_tax_benefit_enabled,
            state_tax_benefit_annual: household.state_tax_benefit_amount,
            percent_used_for_education: household.percent_used_for_education,
            rollover_enabled: household.consider_roth_rollover,
            rollover_min_account_years: rules.rollover_min_account_years,
            rollover_max_years: rules.rollover_max_years,
            roth_rollover_limit: household.roth_rollover_limit,
            annual_roth_limit: household.annual_roth_limit,
            max_loan_to_value_ratio: household.max_loan_to_value_ratio,
            loan_risk_threshold: rules.loan_risk_threshold,
            mec_risk_guard: household.mec_risk_guard,
            income_withdrawal_rate: rules.income_withdrawal_rate,
            income_years: rules.income_years,
            income_net_growth_rate: rules.income_net_growth_rate,
            primary_min_probability: thresholds.primary_min_probability,
            high_confidence_probability: thresholds.high_confidence_probability,
            flexible_max_probability: thresholds.flexible_max_probability,
            max_why: thresholds.max_why,
            max_considerations: thresholds.max_considerations,
        }
    }
}
