//! Comparison output record

use serde::{Deserialize, Serialize};

use super::policy_value::InfiniteBankingResult;
use super::schedule::YearRow;
use super::tax::MixedUseBreakdown;
use crate::assumptions::AssumptionsSnapshot;
use crate::recommendation::RecommendationResult;

/// Complete result of one household comparison
///
/// A snapshot: built once by the engine and never mutated afterwards.
/// Keys serialize in camelCase (`fv529Gross`, `fvIulAccessible`, ...).
///
/// `roth_rollover_possible` is rollover capacity measured against all 529
/// earnings; it does not depend on the mixed-use split. Only
/// `remaining_non_qualified` nets it against the non-education portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub total_contributed: f64,
    pub total_contributed_inflation_adjusted: f64,

    // 529
    pub fv529_gross: f64,
    pub fv529_education_net: f64,
    pub fv529_non_qualified_net: f64,
    pub fv529_mixed_net: f64,
    pub earnings529: f64,
    pub state_tax_benefit: f64,
    pub mixed_use: MixedUseBreakdown,

    // IUL
    pub fv_iul_cash_value_gross: f64,
    pub fv_iul_accessible: f64,
    pub policy_loan_risk_flag: bool,

    // Rollover
    pub roth_rollover_possible: f64,
    pub remaining_non_qualified: f64,

    pub infinite_banking: InfiniteBankingResult,
    pub recommendation: RecommendationResult,
    pub assumptions: AssumptionsSnapshot,
    pub yearly_projection: Vec<YearRow>,
}

impl ComparisonResult {
    /// Headline figures for console and batch output
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            total_contributed: self.total_contributed,
            fv529_gross: self.fv529_gross,
            fv529_education_net: self.fv529_education_net,
            fv529_non_qualified_net: self.fv529_non_qualified_net,
            fv_iul_cash_value_gross: self.fv_iul_cash_value_gross,
            fv_iul_accessible: self.fv_iul_accessible,
            iul_annual_income: self.infinite_banking.annual_income,
            recommendation: self.recommendation.recommendation.as_str(),
            confidence: self.recommendation.confidence.as_str(),
        }
    }
}

/// Flat headline figures, one CSV row per household in batch runs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_contributed: f64,
    pub fv529_gross: f64,
    pub fv529_education_net: f64,
    pub fv529_non_qualified_net: f64,
    pub fv_iul_cash_value_gross: f64,
    pub fv_iul_accessible: f64,
    pub iul_annual_income: f64,
    pub recommendation: &'static str,
    pub confidence: &'static str,
}
