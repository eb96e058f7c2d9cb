//! Projection engine for the 529 versus IUL comparison

mod annuity;
mod engine;
mod policy_value;
mod result;
mod rollover;
mod schedule;
mod tax;

pub use annuity::{earnings, future_value, inflation_adjusted, total_contributions};
pub use engine::{compare_scenarios, ComparisonEngine};
pub use policy_value::{policy_access, project_income, InfiniteBankingResult, PolicyAccess};
pub use result::{ComparisonResult, ComparisonSummary};
pub use rollover::{rollover_amount, RolloverTerms};
pub use schedule::{yearly_schedule, ScheduleInputs, YearRow};
pub use tax::{
    accumulated_state_benefit, mixed_use, non_qualified_net, qualified_net, MixedUseBreakdown,
    WithdrawalTaxRates,
};
