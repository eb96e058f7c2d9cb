//! Orchestration of a single household comparison
//!
//! Data flows strictly forward: annuity totals, tax treatments, rollover,
//! policy access and income, then the recommendation.

use log::{debug, warn};

use super::annuity::{earnings, future_value, inflation_adjusted, total_contributions};
use super::policy_value::{policy_access, project_income};
use super::result::ComparisonResult;
use super::rollover::{rollover_amount, RolloverTerms};
use super::schedule::{yearly_schedule, ScheduleInputs};
use super::tax::{accumulated_state_benefit, mixed_use, non_qualified_net, qualified_net, WithdrawalTaxRates};
use crate::assumptions::{Assumptions, AssumptionsSnapshot};
use crate::household::Household;
use crate::recommendation::{recommend, ProjectedTotals};

/// Comparison engine owning one assumption set
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    assumptions: Assumptions,
}

impl ComparisonEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the full comparison for one household
    ///
    /// Pure and deterministic. Ranges are not re-validated; only
    /// arithmetic edge cases (zero rate, zero years, zero balance) are
    /// guarded.
    pub fn compare(&self, household: &Household) -> ComparisonResult {
        let rules = &self.assumptions.rules;
        let years = household.years_to_goal as f64;
        let monthly = household.monthly_contribution;
        let lump_sum = household.initial_lump_sum;

        let plan_a_rate = self.assumptions.rates.plan_a_rate(household.risk_tolerance);
        let plan_b_rate = self.assumptions.rates.plan_b_rate(household.iul_design_goal);

        // Accumulation
        let total_contributed = total_contributions(monthly, lump_sum, years);
        let fv529_gross = future_value(monthly, lump_sum, plan_a_rate, years);
        let fv_iul_gross = future_value(monthly, lump_sum, plan_b_rate, years);
        let earnings529 = earnings(fv529_gross, total_contributed);
        debug!(
            "Accumulation: contributed={:.2} fv529={:.2} fvIul={:.2}",
            total_contributed, fv529_gross, fv_iul_gross
        );

        // 529 tax treatments
        let tax_rates = WithdrawalTaxRates::new(household.federal_tax_bracket, rules.non_qualified_penalty_rate);
        let state_tax_benefit = accumulated_state_benefit(
            household.state_tax_benefit_enabled,
            household.state_tax_benefit_amount,
            household.years_to_goal,
            total_contributed,
        );
        let mixed = mixed_use(fv529_gross, total_contributed, household.percent_used_for_education, tax_rates);

        // Rollover of unused earnings
        let terms = RolloverTerms::from_household(household);
        let roth_rollover_possible = rollover_amount(&terms, earnings529, rules);
        let remaining_non_qualified = (mixed.non_qualified_portion - roth_rollover_possible).max(0.0);
        debug!(
            "Rollover: eligible={} amount={:.2} remaining={:.2}",
            terms.is_eligible(rules),
            roth_rollover_possible,
            remaining_non_qualified
        );

        // IUL access and income
        let access = policy_access(fv_iul_gross, household.max_loan_to_value_ratio, rules);
        if access.loan_risk_flag {
            warn!(
                "Loan-to-value ratio {:.3} exceeds risk threshold {:.2}",
                household.max_loan_to_value_ratio, rules.loan_risk_threshold
            );
        }
        let infinite_banking = project_income(fv_iul_gross, rules);

        let totals = ProjectedTotals {
            total_contributed,
            state_tax_benefit,
            roth_rollover_possible,
        };
        let recommendation = recommend(household, &totals, &self.assumptions);

        let schedule = ScheduleInputs {
            child_age: household.child_age,
            monthly_contribution: monthly,
            lump_sum,
            plan_a_rate,
            plan_b_rate,
        };

        ComparisonResult {
            total_contributed,
            total_contributed_inflation_adjusted: inflation_adjusted(
                total_contributed,
                household.inflation_assumption,
                years,
            ),
            fv529_gross,
            fv529_education_net: qualified_net(fv529_gross, state_tax_benefit),
            fv529_non_qualified_net: non_qualified_net(fv529_gross, total_contributed, tax_rates),
            fv529_mixed_net: mixed.net,
            earnings529,
            state_tax_benefit,
            mixed_use: mixed,
            fv_iul_cash_value_gross: fv_iul_gross,
            fv_iul_accessible: access.accessible,
            policy_loan_risk_flag: access.loan_risk_flag,
            roth_rollover_possible,
            remaining_non_qualified,
            infinite_banking,
            recommendation,
            assumptions: AssumptionsSnapshot::capture(household, &self.assumptions),
            yearly_projection: yearly_schedule(&schedule, household.years_to_goal),
        }
    }
}

/// Compare both vehicles for one household under the default assumptions
pub fn compare_scenarios(household: &Household) -> ComparisonResult {
    ComparisonEngine::default().compare(household)
}
