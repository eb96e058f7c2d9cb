//! Rule-based recommendation between the 529 plan and the IUL policy
//!
//! The classifier picks one of three outcomes in fixed precedence order.
//! The supporting text comes from per-outcome catalogs of
//! `(predicate, text)` rules, evaluated in order and capped, so each
//! bullet can be tested on its own.

mod catalog;
mod engine;

pub use catalog::{catalog_for, summary_for, BranchCatalog, RationaleRule, RationaleText, RuleContext};
pub use engine::{classify, recommend};

use serde::{Deserialize, Serialize};

/// Which vehicle, or combination, fits the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKind {
    /// 529 as the primary education vehicle
    #[serde(rename = "529_primary")]
    Plan529Primary,
    /// IUL worth considering for flexibility
    #[serde(rename = "iul_consideration")]
    IulConsideration,
    /// Split contributions across both
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Plan529Primary => "529_primary",
            RecommendationKind::IulConsideration => "iul_consideration",
            RecommendationKind::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
        }
    }
}

/// Projection figures the rationale text is allowed to quote
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectedTotals {
    pub total_contributed: f64,
    pub state_tax_benefit: f64,
    pub roth_rollover_possible: f64,
}

/// Recommendation with its auditable rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub recommendation: RecommendationKind,
    pub confidence: Confidence,
    pub summary: String,
    pub why: Vec<String>,
    pub considerations: Vec<String>,
}
