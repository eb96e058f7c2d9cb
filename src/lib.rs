//! Savings Compare - projection and recommendation engine for education savings
//!
//! Compares a 529 education savings plan with a cash-value indexed
//! universal life (IUL) policy for one household:
//! - Future value of both vehicles under monthly compounding
//! - 529 net value under qualified, non-qualified and mixed use
//! - 529 to Roth IRA rollover capacity
//! - IUL loan capacity and an income-phase projection
//! - A rule-based recommendation with auditable rationale
//!
//! The engine is a pure function of the household and the assumption set.

pub mod assumptions;
pub mod error;
pub mod format;
pub mod household;
pub mod projection;
pub mod recommendation;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{Assumptions, AssumptionsSnapshot};
pub use error::ComparisonError;
pub use format::{format_currency, format_currency_with, format_percentage, CurrencyStyle};
pub use household::{Goal, Household, IulDesignGoal, LiquidityNeed, RiskTolerance};
pub use projection::{compare_scenarios, ComparisonEngine, ComparisonResult};
pub use recommendation::{Confidence, RecommendationKind, RecommendationResult};
pub use scenario::ScenarioRunner;
