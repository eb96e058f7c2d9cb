//! 529 to Roth IRA rollover capacity

use crate::assumptions::RuleConstants;
use crate::household::Household;

/// Inputs that gate and cap a 529 to Roth rollover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloverTerms {
    pub enabled: bool,
    pub beneficiary_has_earned_income: bool,
    pub years_account_opened: u32,
    pub lifetime_limit: f64,
    pub annual_limit: f64,
}

impl RolloverTerms {
    pub fn from_household(household: &Household) -> Self {
        Self {
            enabled: household.consider_roth_rollover,
            beneficiary_has_earned_income: household.beneficiary_has_earned_income,
            years_account_opened: household.years_account_opened,
            lifetime_limit: household.roth_rollover_limit,
            annual_limit: household.annual_roth_limit,
        }
    }

    /// Whether every eligibility gate passes
    pub fn is_eligible(&self, rules: &RuleConstants) -> bool {
        self.enabled
            && self.beneficiary_has_earned_income
            && self.years_account_opened >= rules.rollover_min_account_years
    }

    /// Annual tranches claimable since the account became eligible
    pub fn years_available(&self, rules: &RuleConstants) -> u32 {
        if !self.is_eligible(rules) {
            return 0;
        }
        let since_eligible = self.years_account_opened - rules.rollover_min_account_years + 1;
        since_eligible.min(rules.rollover_max_years)
    }
}

/// Amount of 529 earnings that can move into the beneficiary's Roth IRA
///
/// The smallest of the lifetime cap, the available earnings, and the
/// annual cap times the claimable years. Zero if any gate fails.
pub fn rollover_amount(terms: &RolloverTerms, available_earnings: f64, rules: &RuleConstants) -> f64 {
    let years = terms.years_available(rules);
    if years == 0 {
        return 0.0;
    }

    let annual_ceiling = years as f64 * terms.annual_limit;
    terms
        .lifetime_limit
        .min(available_earnings)
        .min(annual_ceiling)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(years_open: u32) -> RolloverTerms {
        RolloverTerms {
            enabled: true,
            beneficiary_has_earned_income: true,
            years_account_opened: years_open,
            lifetime_limit: 35_000.0,
            annual_limit: 7_000.0,
        }
    }

    #[test]
    fn test_eligibility_flips_at_fifteen_years() {
        let rules = RuleConstants::default();

        assert_eq!(rollover_amount(&terms(14), 50_000.0, &rules), 0.0);
        assert_eq!(rollover_amount(&terms(15), 50_000.0, &rules), 7_000.0);
    }

    #[test]
    fn test_years_available_capped_at_five() {
        let rules = RuleConstants::default();

        assert_eq!(terms(15).years_available(&rules), 1);
        assert_eq!(terms(17).years_available(&rules), 3);
        assert_eq!(terms(19).years_available(&rules), 5);
        assert_eq!(terms(40).years_available(&rules), 5);
    }

    #[test]
    fn test_three_way_minimum() {
        let rules = RuleConstants::default();

        // Annual ceiling binds: 3 * 7,000
        assert_eq!(rollover_amount(&terms(17), 50_000.0, &rules), 21_000.0);
        // Earnings bind
        assert_eq!(rollover_amount(&terms(30), 12_345.0, &rules), 12_345.0);
        // Lifetime cap binds
        let mut generous = terms(30);
        generous.annual_limit = 10_000.0;
        assert_eq!(rollover_amount(&generous, 80_000.0, &rules), 35_000.0);
    }

    #[test]
    fn test_gates() {
        let rules = RuleConstants::default();

        let mut disabled = terms(20);
        disabled.enabled = false;
        assert_eq!(rollover_amount(&disabled, 50_000.0, &rules), 0.0);

        let mut no_income = terms(20);
        no_income.beneficiary_has_earned_income = false;
        assert_eq!(rollover_amount(&no_income, 50_000.0, &rules), 0.0);

        assert_eq!(rollover_amount(&terms(20), 0.0, &rules), 0.0);
    }
}
