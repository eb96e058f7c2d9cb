//! Household input record and loading

mod data;
pub mod loader;

pub use data::{Goal, Household, IulDesignGoal, LiquidityNeed, RiskTolerance};
pub use loader::{load_household, load_household_from_reader, load_households, load_households_from_reader};

#[cfg(test)]
pub(crate) use data::tests::sample_household;
