//! Future value primitives under fixed-rate monthly compounding

/// Future value of a level monthly contribution plus a lump sum
///
/// Ordinary annuity (contributions at the end of each month) with
/// `r = annual_rate / 12` and `n = years * 12`:
///
/// `FV = m * ((1 + r)^n - 1) / r + L * (1 + r)^n`
///
/// Returns the lump sum unchanged when `years <= 0`, and falls back to
/// simple accumulation when the rate is zero.
pub fn future_value(monthly_contribution: f64, lump_sum: f64, annual_rate: f64, years: f64) -> f64 {
    if years <= 0.0 {
        return lump_sum;
    }

    if annual_rate == 0.0 {
        return monthly_contribution * 12.0 * years + lump_sum;
    }

    let r = annual_rate / 12.0;
    let growth = (1.0 + r).powf(years * 12.0);

    monthly_contribution * (growth - 1.0) / r + lump_sum * growth
}

/// Simple (non-compounded) sum of all contributions, the cost basis
pub fn total_contributions(monthly_contribution: f64, lump_sum: f64, years: f64) -> f64 {
    monthly_contribution * 12.0 * years.max(0.0) + lump_sum
}

/// Deflate a nominal amount to today's purchasing power
pub fn inflation_adjusted(amount: f64, inflation: f64, years: f64) -> f64 {
    if years <= 0.0 || inflation <= -1.0 {
        return amount;
    }
    amount / (1.0 + inflation).powf(years)
}

/// Positive part of `value - basis`
pub fn earnings(value: f64, basis: f64) -> f64 {
    (value - basis).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_future_value() {
        // 500/month + 10,000 at 6% for 10 years
        let growth = 1.005_f64.powi(120);
        let expected = 500.0 * (growth - 1.0) / 0.005 + 10_000.0 * growth;

        let fv = future_value(500.0, 10_000.0, 0.06, 10.0);
        assert_abs_diff_eq!(fv, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(fv, 100_133.64, epsilon = 0.005);
    }

    #[test]
    fn test_zero_years_returns_lump_sum() {
        assert_eq!(future_value(500.0, 10_000.0, 0.06, 0.0), 10_000.0);
        assert_eq!(future_value(999.0, 2_500.0, 0.12, -3.0), 2_500.0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(future_value(250.0, 1_000.0, 0.0, 18.0), 250.0 * 12.0 * 18.0 + 1_000.0);
    }

    #[test]
    fn test_total_contributions() {
        assert_eq!(total_contributions(500.0, 10_000.0, 10.0), 70_000.0);
        assert_eq!(total_contributions(500.0, 10_000.0, 0.0), 10_000.0);
    }

    #[test]
    fn test_inflation_adjusted() {
        assert_abs_diff_eq!(inflation_adjusted(1_000.0, 0.03, 1.0), 1_000.0 / 1.03, epsilon = 1e-9);
        assert_eq!(inflation_adjusted(1_000.0, 0.03, 0.0), 1_000.0);
        assert_eq!(inflation_adjusted(1_000.0, 0.0, 10.0), 1_000.0);
    }

    #[test]
    fn test_earnings_floor() {
        assert_eq!(earnings(90.0, 100.0), 0.0);
        assert_eq!(earnings(150.0, 100.0), 50.0);
    }
}
