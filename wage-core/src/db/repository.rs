use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    CompensationProfile, CompensationRecord, MonthlySnapshot, NewSnapshot, RecordTerms,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A stored row that cannot be turned back into a model.
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),
}

/// Append-only log of compensation records and their monthly snapshots.
///
/// Every write stores the record row and its snapshot together, so a
/// record's wage always matches its newest snapshot.
#[async_trait]
pub trait CompensationRepository: Send + Sync {
    // Records
    async fn create_record(
        &self,
        profile: &CompensationProfile,
        snapshot: &NewSnapshot,
    ) -> Result<CompensationRecord, RepositoryError>;

    async fn get_record(&self, id: i64) -> Result<CompensationRecord, RepositoryError>;

    /// All records, newest first.
    async fn list_records(&self) -> Result<Vec<CompensationRecord>, RepositoryError>;

    /// Overwrites salary, RSU, daily hours and wage, then appends `snapshot`.
    async fn update_record(
        &self,
        id: i64,
        terms: &RecordTerms,
        snapshot: &NewSnapshot,
    ) -> Result<CompensationRecord, RepositoryError>;

    // Snapshots
    /// Snapshot history in chronological order, for one record or all.
    async fn list_snapshots(
        &self,
        record_id: Option<i64>,
    ) -> Result<Vec<MonthlySnapshot>, RepositoryError>;
}
