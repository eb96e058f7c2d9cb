//! Load household records from JSON documents and CSV batch files

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;

use super::{Goal, Household, IulDesignGoal, LiquidityNeed, RiskTolerance};
use crate::error::{ComparisonError, Result};

/// Raw CSV row for batch files, one household per line
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    child_age: u8,
    years_to_goal: u32,
    monthly_contribution: f64,
    initial_lump_sum: f64,
    risk_tolerance: String,
    liquidity_need: String,
    federal_tax_bracket: f64,
    state_tax_benefit_enabled: bool,
    state_tax_benefit_amount: f64,
    percent_used_for_education: f64,
    consider_roth_rollover: bool,
    beneficiary_has_earned_income: bool,
    years_account_opened: u32,
    roth_rollover_limit: f64,
    annual_roth_limit: f64,
    iul_design_goal: String,
    mec_risk_guard: bool,
    max_loan_to_value_ratio: f64,
    inflation_assumption: f64,
    education_probability: f64,
    non_traditional_path: bool,
    scholarship_likely: bool,
    /// Semicolon separated tags, e.g. `legacy;flex_savings`
    #[serde(default)]
    goals: String,
}

impl CsvRow {
    fn into_household(self) -> Result<Household> {
        let risk_tolerance = match self.risk_tolerance.as_str() {
            "conservative" => RiskTolerance::Conservative,
            "balanced" => RiskTolerance::Balanced,
            "growth" => RiskTolerance::Growth,
            other => return Err(invalid("riskTolerance", other)),
        };

        let liquidity_need = match self.liquidity_need.as_str() {
            "low" => LiquidityNeed::Low,
            "medium" => LiquidityNeed::Medium,
            "high" => LiquidityNeed::High,
            other => return Err(invalid("liquidityNeed", other)),
        };

        let iul_design_goal = match self.iul_design_goal.as_str() {
            "cash_focused" => IulDesignGoal::CashFocused,
            "balanced" => IulDesignGoal::Balanced,
            other => return Err(invalid("iulDesignGoal", other)),
        };

        let mut goals = BTreeSet::new();
        for tag in self.goals.split(';').filter(|t| !t.trim().is_empty()) {
            let goal = Goal::parse(tag).ok_or_else(|| invalid("goals", tag))?;
            goals.insert(goal);
        }

        Ok(Household {
            child_age: self.child_age,
            years_to_goal: self.years_to_goal,
            monthly_contribution: self.monthly_contribution,
            initial_lump_sum: self.initial_lump_sum,
            risk_tolerance,
            liquidity_need,
            federal_tax_bracket: self.federal_tax_bracket,
            state_tax_benefit_enabled: self.state_tax_benefit_enabled,
            state_tax_benefit_amount: self.state_tax_benefit_amount,
            percent_used_for_education: self.percent_used_for_education,
            consider_roth_rollover: self.consider_roth_rollover,
            beneficiary_has_earned_income: self.beneficiary_has_earned_income,
            years_account_opened: self.years_account_opened,
            roth_rollover_limit: self.roth_rollover_limit,
            annual_roth_limit: self.annual_roth_limit,
            iul_design_goal,
            mec_risk_guard: self.mec_risk_guard,
            max_loan_to_value_ratio: self.max_loan_to_value_ratio,
            inflation_assumption: self.inflation_assumption,
            education_probability: self.education_probability,
            non_traditional_path: self.non_traditional_path,
            scholarship_likely: self.scholarship_likely,
            goals,
        })
    }
}

fn invalid(field: &'static str, value: &str) -> ComparisonError {
    ComparisonError::InvalidInput {
        field,
        reason: format!("unknown value `{}`", value),
    }
}

/// Load and validate a single household from a JSON file
pub fn load_household<P: AsRef<Path>>(path: P) -> Result<Household> {
    let file = File::open(path)?;
    load_household_from_reader(BufReader::new(file))
}

/// Load and validate a single household from any JSON reader
pub fn load_household_from_reader<R: Read>(reader: R) -> Result<Household> {
    let household: Household = serde_json::from_reader(reader)?;
    household.validate()?;
    Ok(household)
}

/// Load and validate all households from a CSV batch file
pub fn load_households<P: AsRef<Path>>(path: P) -> Result<Vec<Household>> {
    let file = File::open(path)?;
    load_households_from_reader(file)
}

/// Load households from any CSV reader (e.g., string buffer, network stream)
pub fn load_households_from_reader<R: Read>(reader: R) -> Result<Vec<Household>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut households = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let household = row.into_household()?;
        household.validate()?;
        households.push(household);
    }

    Ok(households)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::data::tests::sample_household;

    const HEADER: &str = "childAge,yearsToGoal,monthlyContribution,initialLumpSum,riskTolerance,\
liquidityNeed,federalTaxBracket,stateTaxBenefitEnabled,stateTaxBenefitAmount,\
percentUsedForEducation,considerRothRollover,beneficiaryHasEarnedIncome,yearsAccountOpened,\
rothRolloverLimit,annualRothLimit,iulDesignGoal,mecRiskGuard,maxLoanToValueRatio,\
inflationAssumption,educationProbability,nonTraditionalPath,scholarshipLikely,goals";

    #[test]
    fn test_load_households_csv() {
        let data = format!(
            "{}\n\
             5,13,300,5000,balanced,medium,0.22,true,250,80,true,true,16,35000,7000,cash_focused,true,0.8,0.03,60,false,false,\n\
             2,16,500,0,growth,high,0.24,false,0,50,false,false,0,35000,7000,balanced,false,0.95,0.025,30,true,true,legacy;flex_savings\n",
            HEADER
        );

        let households = load_households_from_reader(data.as_bytes()).expect("Failed to load households");
        assert_eq!(households.len(), 2);
        assert_eq!(households[0], sample_household());

        let second = &households[1];
        assert_eq!(second.risk_tolerance, RiskTolerance::Growth);
        assert_eq!(second.iul_design_goal, IulDesignGoal::Balanced);
        assert!(second.has_goal(Goal::Legacy));
        assert!(second.has_goal(Goal::FlexSavings));
        assert_eq!(second.goals.len(), 2);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let data = format!(
            "{}\n5,13,300,5000,reckless,medium,0.22,true,250,80,true,true,16,35000,7000,cash_focused,true,0.8,0.03,60,false,false,\n",
            HEADER
        );

        let err = load_households_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("riskTolerance"), "{}", err);
    }

    #[test]
    fn test_load_household_json_validates() {
        let mut household = sample_household();
        household.percent_used_for_education = 140.0;
        let json = serde_json::to_vec(&household).unwrap();

        let err = load_household_from_reader(json.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::InvalidInput { field: "percentUsedForEducation", .. }
        ));
    }
}
