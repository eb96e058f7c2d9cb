//! Year-by-year balance schedule for both vehicles

use serde::{Deserialize, Serialize};

use super::annuity::{future_value, total_contributions};

/// Balances at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub year: u32,
    pub child_age: u8,
    pub contributed: f64,
    pub plan_a_balance: f64,
    pub plan_b_cash_value: f64,
}

/// Contribution stream and growth rates shared by every row
#[derive(Debug, Clone, Copy)]
pub struct ScheduleInputs {
    pub child_age: u8,
    pub monthly_contribution: f64,
    pub lump_sum: f64,
    pub plan_a_rate: f64,
    pub plan_b_rate: f64,
}

/// One row per year from 1 through `years`
pub fn yearly_schedule(inputs: &ScheduleInputs, years: u32) -> Vec<YearRow> {
    (1..=years)
        .map(|year| {
            let y = year as f64;
            YearRow {
                year,
                child_age: inputs.child_age.saturating_add(year.min(u8::MAX as u32) as u8),
                contributed: total_contributions(inputs.monthly_contribution, inputs.lump_sum, y),
                plan_a_balance: future_value(inputs.monthly_contribution, inputs.lump_sum, inputs.plan_a_rate, y),
                plan_b_cash_value: future_value(inputs.monthly_contribution, inputs.lump_sum, inputs.plan_b_rate, y),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScheduleInputs {
        ScheduleInputs {
            child_age: 4,
            monthly_contribution: 200.0,
            lump_sum: 1_000.0,
            plan_a_rate: 0.06,
            plan_b_rate: 0.045,
        }
    }

    #[test]
    fn test_schedule_rows() {
        let rows = yearly_schedule(&inputs(), 14);

        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[0].child_age, 5);
        assert_eq!(rows[0].contributed, 3_400.0);
        assert_eq!(rows[13].child_age, 18);
        assert_eq!(rows[13].plan_a_balance, future_value(200.0, 1_000.0, 0.06, 14.0));
    }

    #[test]
    fn test_balances_grow_and_higher_rate_leads() {
        let rows = yearly_schedule(&inputs(), 10);

        for pair in rows.windows(2) {
            assert!(pair[1].plan_a_balance > pair[0].plan_a_balance);
            assert!(pair[1].plan_b_cash_value > pair[0].plan_b_cash_value);
        }
        assert!(rows.iter().all(|r| r.plan_a_balance > r.plan_b_cash_value));
        assert!(rows.iter().all(|r| r.plan_b_cash_value > r.contributed));
    }

    #[test]
    fn test_empty_schedule() {
        assert!(yearly_schedule(&inputs(), 0).is_empty());
    }
}
