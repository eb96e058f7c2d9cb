//! Plan comparison CLI
//!
//! Compares a 529 plan with a cash-value IUL policy for one household

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use savings_compare::assumptions::DEFAULT_ASSUMPTIONS_FILE;
use savings_compare::household::load_household;
use savings_compare::{format_currency, format_percentage, Assumptions, ComparisonEngine};

#[derive(Parser, Debug)]
#[command(name = "plan-compare", version, about = "Compare a 529 plan with a cash-value IUL policy")]
struct Args {
    /// Household input as JSON
    #[arg(short, long)]
    input: PathBuf,

    /// Assumption overrides as `key,value` CSV
    #[arg(short, long)]
    assumptions: Option<PathBuf>,

    /// Write the full comparison result as JSON
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Write the year-by-year balances as CSV
    #[arg(long)]
    schedule_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Plan Compare v{}", env!("CARGO_PKG_VERSION"));
    println!("==================\n");

    let household = load_household(&args.input)
        .with_context(|| format!("failed to load household from {}", args.input.display()))?;

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
        None => {
            let default_path = PathBuf::from(DEFAULT_ASSUMPTIONS_FILE);
            if default_path.exists() {
                Assumptions::from_csv_path(&default_path)
                    .with_context(|| format!("failed to load assumptions from {}", default_path.display()))?
            } else {
                Assumptions::default_rules()
            }
        }
    };

    let engine = ComparisonEngine::new(assumptions);
    let result = engine.compare(&household);
    let snapshot = &result.assumptions;

    println!("Household:");
    println!("  Child Age: {}", household.child_age);
    println!("  Years to Goal: {}", household.years_to_goal);
    println!("  Monthly Contribution: {}", format_currency(household.monthly_contribution));
    println!("  Initial Lump Sum: {}", format_currency(household.initial_lump_sum));
    println!("  Risk Tolerance: {}", household.risk_tolerance.as_str());
    println!("  IUL Design: {}", household.iul_design_goal.as_str());
    println!();

    println!("Contributions:");
    println!("  Total Contributed: {}", format_currency(result.total_contributed));
    println!(
        "  In Today's Dollars: {} (at {} inflation)",
        format_currency(result.total_contributed_inflation_adjusted),
        format_percentage(snapshot.inflation_rate, 1),
    );
    println!();

    println!("529 Plan (growth {}):", format_percentage(snapshot.plan_a_growth_rate, 1));
    println!("  Gross Value: {}", format_currency(result.fv529_gross));
    println!("  Earnings: {}", format_currency(result.earnings529));
    println!("  Education Use: {}", format_currency(result.fv529_education_net));
    println!("  Non-Qualified Use: {}", format_currency(result.fv529_non_qualified_net));
    println!(
        "  Mixed Use ({}% education): {}",
        household.percent_used_for_education,
        format_currency(result.fv529_mixed_net),
    );
    println!("  State Tax Benefit: {}", format_currency(result.state_tax_benefit));
    println!("  Roth Rollover Possible: {}", format_currency(result.roth_rollover_possible));
    println!("  Remaining Non-Qualified: {}", format_currency(result.remaining_non_qualified));
    println!();

    println!("IUL Policy (growth {}):", format_percentage(snapshot.plan_b_growth_rate, 1));
    println!("  Cash Value: {}", format_currency(result.fv_iul_cash_value_gross));
    println!(
        "  Accessible ({} LTV): {}",
        format_percentage(household.max_loan_to_value_ratio, 0),
        format_currency(result.fv_iul_accessible),
    );
    if result.policy_loan_risk_flag {
        println!("  WARNING: loan-to-value above {}", format_percentage(snapshot.loan_risk_threshold, 0));
    }

    let income = &result.infinite_banking;
    println!("  Annual Income: {} for {} years", format_currency(income.annual_income), income.income_years);
    println!("  Total Income: {}", format_currency(income.total_income));
    println!("  Ending Cash Value: {}", format_currency(income.ending_cash_value));
    println!();

    let rec = &result.recommendation;
    println!("Recommendation: {} ({} confidence)", rec.recommendation.as_str(), rec.confidence.as_str());
    println!("  {}", rec.summary);
    println!("\nWhy:");
    for line in &rec.why {
        println!("  - {}", line);
    }
    println!("\nConsiderations:");
    for line in &rec.considerations {
        println!("  - {}", line);
    }

    if let Some(path) = &args.json_out {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &result).context("failed to write comparison JSON")?;
        println!("\nFull result written to: {}", path.display());
    }

    if let Some(path) = &args.schedule_csv {
        let mut writer = csv::Writer::from_path(path).with_context(|| format!("failed to create {}", path.display()))?;
        for row in &result.yearly_projection {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("Yearly schedule written to: {}", path.display());
    }

    Ok(())
}
