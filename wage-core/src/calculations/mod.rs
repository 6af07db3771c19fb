//! Wage calculations for both the profile and the scenario variant.
//!
//! Every calculator here is pure: inputs in, a breakdown out, no I/O.

pub mod common;
pub mod commute;
pub mod comparison;
pub mod error;
pub mod scenario;
pub mod wage;

pub use commute::{CommuteCost, CommuteCostCalculator, WORKING_DAYS_PER_YEAR};
pub use comparison::{CommuteComparison, MetricDelta};
pub use error::CalculationError;
pub use scenario::{
    CommuteMetrics, CostComponent, PaycheckPerspective, ScenarioCalculator, ScenarioResult,
    WEEKS_PER_MONTH, WORK_WEEKS_PER_YEAR,
};
pub use wage::{ProfileWageResult, WageCalculator};
