pub mod calculations;
pub mod db;
pub mod ledger;
pub mod models;
pub mod report;

pub use db::repository::{CompensationRepository, RepositoryError};
pub use ledger::{CompensationLedger, LedgerError, Submission};
pub use models::*;
pub use report::{TrendPoint, WageReport, WageSummary, WageTrend};
