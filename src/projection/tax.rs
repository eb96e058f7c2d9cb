//! Net value of a 529 balance under each withdrawal treatment
//!
//! All three treatments start from the same gross future value and cost
//! basis. Earnings are always `max(0, gross - contributed)`.

use serde::{Deserialize, Serialize};

use super::annuity::earnings;

/// Income tax and penalty rates applied to non-qualified earnings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalTaxRates {
    pub income_tax_rate: f64,
    pub penalty_rate: f64,
}

impl WithdrawalTaxRates {
    pub fn new(income_tax_rate: f64, penalty_rate: f64) -> Self {
        Self { income_tax_rate, penalty_rate }
    }

    fn tax_on(&self, taxable_earnings: f64) -> (f64, f64) {
        (taxable_earnings * self.income_tax_rate, taxable_earnings * self.penalty_rate)
    }
}

/// Split of a 529 balance between qualified and non-qualified use
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedUseBreakdown {
    /// Withdrawn for qualified education, untaxed
    pub education_portion: f64,
    /// Withdrawn for anything else
    pub non_qualified_portion: f64,
    /// Earnings carried by the non-qualified portion
    pub non_qualified_earnings: f64,
    pub income_tax: f64,
    pub penalty: f64,
    pub net: f64,
}

/// State tax benefit accumulated over the horizon, not compounded
pub fn accumulated_state_benefit(enabled: bool, annual_amount: f64, years: u32, contributed: f64) -> f64 {
    if !enabled || contributed <= 0.0 {
        return 0.0;
    }
    (annual_amount * years as f64).max(0.0)
}

/// Net value when the whole balance funds qualified education
pub fn qualified_net(gross: f64, state_benefit: f64) -> f64 {
    gross + state_benefit
}

/// Net value when the whole balance is withdrawn for non-qualified use
pub fn non_qualified_net(gross: f64, contributed: f64, rates: WithdrawalTaxRates) -> f64 {
    let (income_tax, penalty) = rates.tax_on(earnings(gross, contributed));
    (gross - income_tax - penalty).max(0.0)
}

/// Net value when `percent_for_education` of the balance is used for education
///
/// Earnings are spread across both portions in proportion to their size,
/// so the non-qualified portion carries `portion * earnings / gross`.
/// A zero gross balance has nothing to split and nets to itself.
pub fn mixed_use(
    gross: f64,
    contributed: f64,
    percent_for_education: f64,
    rates: WithdrawalTaxRates,
) -> MixedUseBreakdown {
    if gross <= 0.0 {
        return MixedUseBreakdown {
            net: gross.max(0.0),
            ..Default::default()
        };
    }

    let share = (percent_for_education / 100.0).clamp(0.0, 1.0);
    let education_portion = gross * share;
    let non_qualified_portion = gross - education_portion;

    let earnings_ratio = earnings(gross, contributed) / gross;
    let non_qualified_earnings = non_qualified_portion * earnings_ratio;
    let (income_tax, penalty) = rates.tax_on(non_qualified_earnings);

    MixedUseBreakdown {
        education_portion,
        non_qualified_portion,
        non_qualified_earnings,
        income_tax,
        penalty,
        net: (education_portion + non_qualified_portion - income_tax - penalty).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rates() -> WithdrawalTaxRates {
        WithdrawalTaxRates::new(0.22, 0.10)
    }

    #[test]
    fn test_state_benefit_gating() {
        assert_eq!(accumulated_state_benefit(true, 250.0, 13, 50_000.0), 3_250.0);
        assert_eq!(accumulated_state_benefit(false, 250.0, 13, 50_000.0), 0.0);
        assert_eq!(accumulated_state_benefit(true, 250.0, 13, 0.0), 0.0);
    }

    #[test]
    fn test_qualified_net_adds_benefit() {
        assert_eq!(qualified_net(100_000.0, 2_500.0), 102_500.0);
    }

    #[test]
    fn test_non_qualified_net() {
        // 30,000 earnings taxed at 22% + 10%
        let net = non_qualified_net(100_000.0, 70_000.0, rates());
        assert_abs_diff_eq!(net, 100_000.0 - 30_000.0 * 0.32, epsilon = 1e-9);
    }

    #[test]
    fn test_non_qualified_net_without_earnings() {
        assert_eq!(non_qualified_net(60_000.0, 70_000.0, rates()), 60_000.0);
    }

    #[test]
    fn test_mixed_use_allocates_earnings_pro_rata() {
        let mixed = mixed_use(100_000.0, 70_000.0, 75.0, rates());

        assert_abs_diff_eq!(mixed.education_portion, 75_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mixed.non_qualified_portion, 25_000.0, epsilon = 1e-9);
        // 25% of the 30,000 earnings
        assert_abs_diff_eq!(mixed.non_qualified_earnings, 7_500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mixed.income_tax, 1_650.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mixed.penalty, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mixed.net, 97_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_use_endpoints_match_pure_treatments() {
        let all_education = mixed_use(100_000.0, 70_000.0, 100.0, rates());
        assert_abs_diff_eq!(all_education.net, 100_000.0, epsilon = 1e-9);

        let none_education = mixed_use(100_000.0, 70_000.0, 0.0, rates());
        assert_abs_diff_eq!(
            none_education.net,
            non_qualified_net(100_000.0, 70_000.0, rates()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mixed_use_zero_gross() {
        let mixed = mixed_use(0.0, 0.0, 40.0, rates());
        assert_eq!(mixed, MixedUseBreakdown::default());
    }
}
