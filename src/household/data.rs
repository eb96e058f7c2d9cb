//! Household input record for a comparison run

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ComparisonError, Result};

/// Investment risk preference, drives the 529 growth assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Balanced,
    Growth,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Conservative,
        RiskTolerance::Balanced,
        RiskTolerance::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Balanced => "balanced",
            RiskTolerance::Growth => "growth",
        }
    }
}

/// How soon and how freely the family may need to reach the money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityNeed {
    Low,
    Medium,
    High,
}

impl LiquidityNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityNeed::Low => "low",
            LiquidityNeed::Medium => "medium",
            LiquidityNeed::High => "high",
        }
    }
}

/// IUL policy design, drives the illustrated crediting assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IulDesignGoal {
    /// Minimum death benefit, maximum early cash value
    CashFocused,
    /// Blend of death benefit and cash accumulation
    Balanced,
}

impl IulDesignGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            IulDesignGoal::CashFocused => "cash_focused",
            IulDesignGoal::Balanced => "balanced",
        }
    }
}

/// Household goal tags used only by the recommendation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Education,
    Legacy,
    FlexSavings,
    Retirement,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Education => "education",
            Goal::Legacy => "legacy",
            Goal::FlexSavings => "flex_savings",
            Goal::Retirement => "retirement",
        }
    }

    /// Parse a single tag as written in CSV batch files
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "education" => Some(Goal::Education),
            "legacy" => Some(Goal::Legacy),
            "flex_savings" => Some(Goal::FlexSavings),
            "retirement" => Some(Goal::Retirement),
            _ => None,
        }
    }
}

/// A single household comparison request
///
/// Field names serialize in camelCase (`childAge`, `yearsToGoal`, ...).
/// Ranges are the caller's responsibility; see [`Household::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    // Household and time horizon
    pub child_age: u8,
    pub years_to_goal: u32,
    pub monthly_contribution: f64,
    pub initial_lump_sum: f64,

    // Preferences
    pub risk_tolerance: RiskTolerance,
    pub liquidity_need: LiquidityNeed,

    // Tax context
    pub federal_tax_bracket: f64,
    pub state_tax_benefit_enabled: bool,
    /// Annual state deduction/credit value in currency
    pub state_tax_benefit_amount: f64,

    /// Share of the 529 expected to fund qualified education, 0-100
    pub percent_used_for_education: f64,

    // 529 to Roth IRA rollover
    pub consider_roth_rollover: bool,
    pub beneficiary_has_earned_income: bool,
    pub years_account_opened: u32,
    /// Lifetime rollover cap
    pub roth_rollover_limit: f64,
    /// Per-year Roth contribution cap
    pub annual_roth_limit: f64,

    // IUL design
    pub iul_design_goal: IulDesignGoal,
    pub mec_risk_guard: bool,
    pub max_loan_to_value_ratio: f64,

    pub inflation_assumption: f64,

    // Recommendation-only signals
    pub education_probability: f64,
    pub non_traditional_path: bool,
    pub scholarship_likely: bool,
    #[serde(default)]
    pub goals: BTreeSet<Goal>,
}

impl Household {
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// Check every documented range, returning the first violation
    pub fn validate(&self) -> Result<()> {
        check_range("childAge", self.child_age as f64, 0.0, 17.0)?;
        check_range("yearsToGoal", self.years_to_goal as f64, 1.0, 25.0)?;
        check_non_negative("monthlyContribution", self.monthly_contribution)?;
        check_non_negative("initialLumpSum", self.initial_lump_sum)?;
        check_range("federalTaxBracket", self.federal_tax_bracket, 0.0, 1.0)?;
        check_non_negative("stateTaxBenefitAmount", self.state_tax_benefit_amount)?;
        check_range("percentUsedForEducation", self.percent_used_for_education, 0.0, 100.0)?;
        check_non_negative("rothRolloverLimit", self.roth_rollover_limit)?;
        check_non_negative("annualRothLimit", self.annual_roth_limit)?;
        check_finite("inflationAssumption", self.inflation_assumption)?;
        check_range("educationProbability", self.education_probability, 0.0, 100.0)?;

        check_finite("maxLoanToValueRatio", self.max_loan_to_value_ratio)?;
        if self.max_loan_to_value_ratio <= 0.0 || self.max_loan_to_value_ratio > 1.0 {
            return Err(ComparisonError::InvalidInput {
                field: "maxLoanToValueRatio",
                reason: format!("{} is outside (0, 1]", self.max_loan_to_value_ratio),
            });
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ComparisonError::InvalidInput {
            field,
            reason: format!("{} is not a finite number", value),
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ComparisonError::InvalidInput {
            field,
            reason: format!("{} must not be negative", value),
        });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        return Err(ComparisonError::InvalidInput {
            field,
            reason: format!("{} is outside [{}, {}]", value, min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Baseline household shared by tests across the crate
    pub(crate) fn sample_household() -> Household {
        Household {
            child_age: 5,
            years_to_goal: 13,
            monthly_contribution: 300.0,
            initial_lump_sum: 5_000.0,
            risk_tolerance: RiskTolerance::Balanced,
            liquidity_need: LiquidityNeed::Medium,
            federal_tax_bracket: 0.22,
            state_tax_benefit_enabled: true,
            state_tax_benefit_amount: 250.0,
            percent_used_for_education: 80.0,
            consider_roth_rollover: true,
            beneficiary_has_earned_income: true,
            years_account_opened: 16,
            roth_rollover_limit: 35_000.0,
            annual_roth_limit: 7_000.0,
            iul_design_goal: IulDesignGoal::CashFocused,
            mec_risk_guard: true,
            max_loan_to_value_ratio: 0.80,
            inflation_assumption: 0.03,
            education_probability: 60.0,
            non_traditional_path: false,
            scholarship_likely: false,
            goals: BTreeSet::new(),
        }
    }

    #[test]
    fn test_sample_household_is_valid() {
        assert!(sample_household().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut household = sample_household();
        household.years_to_goal = 0;
        match household.validate() {
            Err(ComparisonError::InvalidInput { field, .. }) => assert_eq!(field, "yearsToGoal"),
            other => panic!("expected yearsToGoal error, got {:?}", other),
        }

        let mut household = sample_household();
        household.max_loan_to_value_ratio = 0.0;
        assert!(household.validate().is_err());

        let mut household = sample_household();
        household.monthly_contribution = f64::NAN;
        assert!(household.validate().is_err());
    }

    #[test]
    fn test_camel_case_round_trip() {
        let mut household = sample_household();
        household.goals.insert(Goal::Legacy);
        household.goals.insert(Goal::FlexSavings);

        let json = serde_json::to_string(&household).unwrap();
        assert!(json.contains("\"childAge\":5"));
        assert!(json.contains("\"iulDesignGoal\":\"cash_focused\""));
        assert!(json.contains("\"goals\":[\"legacy\",\"flex_savings\"]"));

        let parsed: Household = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, household);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = serde_json::to_string(&sample_household())
            .unwrap()
            .replace("\"balanced\"", "\"aggressive\"");
        assert!(serde_json::from_str::<Household>(&json).is_err());
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!(Goal::parse(" legacy "), Some(Goal::Legacy));
        assert_eq!(Goal::parse("flex_savings"), Some(Goal::FlexSavings));
        assert_eq!(Goal::parse("yacht"), None);
    }
}
