//! Three-branch recommendation classifier

use log::debug;

use super::catalog::{catalog_for, summary_for, RuleContext};
use super::{Confidence, ProjectedTotals, RecommendationKind, RecommendationResult};
use crate::assumptions::{Assumptions, RecommendationThresholds};
use crate::household::{Household, LiquidityNeed};

/// Pick the outcome and confidence, first matching branch wins
///
/// 1. 529 primary: likely education, low liquidity need, traditional path.
/// 2. IUL consideration: unlikely education, non-traditional path, or high
///    liquidity need.
/// 3. Hybrid otherwise.
pub fn classify(household: &Household, thresholds: &RecommendationThresholds) -> (RecommendationKind, Confidence) {
    let probability = household.education_probability;

    if probability >= thresholds.primary_min_probability
        && household.liquidity_need == LiquidityNeed::Low
        && !household.non_traditional_path
    {
        let confidence = if probability >= thresholds.high_confidence_probability {
            Confidence::High
        } else {
            Confidence::Medium
        };
        return (RecommendationKind::Plan529Primary, confidence);
    }

    if probability <= thresholds.flexible_max_probability
        || household.non_traditional_path
        || household.liquidity_need == LiquidityNeed::High
    {
        let confidence = if household.liquidity_need == LiquidityNeed::High {
            Confidence::High
        } else {
            Confidence::Medium
        };
        return (RecommendationKind::IulConsideration, confidence);
    }

    (RecommendationKind::Hybrid, Confidence::Medium)
}

/// Classify the household and assemble the supporting rationale
pub fn recommend(household: &Household, totals: &ProjectedTotals, assumptions: &Assumptions) -> RecommendationResult {
    let thresholds = &assumptions.thresholds;
    let (kind, confidence) = classify(household, thresholds);
    debug!("Recommendation {} ({})", kind.as_str(), confidence.as_str());

    let ctx = RuleContext { household, totals, assumptions };
    let catalog = catalog_for(kind);

    RecommendationResult {
        recommendation: kind,
        confidence,
        summary: summary_for(kind).to_string(),
        why: catalog.why_bullets(&ctx, thresholds.max_why),
        considerations: catalog.consideration_bullets(&ctx, thresholds.max_considerations),
    }
}
