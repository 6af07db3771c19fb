//! Calculates profiles and keeps their history in a [`CompensationRepository`].

use thiserror::Error;
use tracing::{debug, info};

use crate::calculations::{CalculationError, ProfileWageResult, WageCalculator};
use crate::db::{CompensationRepository, RepositoryError};
use crate::models::{CompensationProfile, CompensationRecord, MonthLabel, MonthlySnapshot, NewSnapshot, TermChanges};
use crate::report::WageReport;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A stored record together with the figures it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: CompensationRecord,
    pub result: ProfileWageResult,
}

/// Profile-variant workflow: compute, then append to the log.
///
/// Nothing is written unless the calculation succeeds.
pub struct CompensationLedger<'a, R: CompensationRepository + ?Sized> {
    repo: &'a R,
    calculator: WageCalculator,
}

impl<'a, R: CompensationRepository + ?Sized> CompensationLedger<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self::with_calculator(repo, WageCalculator::default())
    }

    pub fn with_calculator(
        repo: &'a R,
        calculator: WageCalculator,
    ) -> Self {
        Self { repo, calculator }
    }

    /// Computes `profile` and stores it with its first snapshot for `month`.
    pub async fn submit(
        &self,
        profile: &CompensationProfile,
        month: &MonthLabel,
    ) -> Result<Submission, LedgerError> {
        let result = self.calculator.calculate(profile)?;
        let snapshot = NewSnapshot::from_breakdown(month.clone(), &result.breakdown);
        let record = self.repo.create_record(profile, &snapshot).await?;

        info!(
            record_id = record.id,
            name = %record.profile.name,
            wage = %record.real_hourly_wage.round_dp(2),
            "Stored compensation record"
        );

        Ok(Submission { record, result })
    }

    pub async fn record(&self, id: i64) -> Result<CompensationRecord, LedgerError> {
        Ok(self.repo.get_record(id).await?)
    }

    /// Every record, newest first.
    pub async fn records(&self) -> Result<Vec<CompensationRecord>, LedgerError> {
        Ok(self.repo.list_records().await?)
    }

    /// Applies `changes` to record `id`, recomputes it, and appends a
    /// snapshot for `month`.
    ///
    /// Fields other than salary, RSU and daily hours come from the stored
    /// record unchanged. Several updates in the same month each append
    /// their own snapshot.
    pub async fn update(
        &self,
        id: i64,
        changes: &TermChanges,
        month: &MonthLabel,
    ) -> Result<Submission, LedgerError> {
        let stored = self.repo.get_record(id).await?;
        let terms = changes.apply(stored.terms());
        let profile = stored.profile.with_terms(&terms);
        debug!(record_id = id, ?terms, "Recomputing record");

        let result = self.calculator.calculate(&profile)?;
        let snapshot = NewSnapshot::from_breakdown(month.clone(), &result.breakdown);
        let record = self.repo.update_record(id, &terms, &snapshot).await?;

        info!(
            record_id = id,
            wage = %record.real_hourly_wage.round_dp(2),
            "Updated compensation record"
        );

        Ok(Submission { record, result })
    }

    /// Recomputes a stored record without changing it.
    pub fn recalculate(
        &self,
        record: &CompensationRecord,
    ) -> Result<ProfileWageResult, LedgerError> {
        Ok(self.calculator.calculate(&record.profile)?)
    }

    /// Snapshot history of one record, oldest first.
    pub async fn history(&self, id: i64) -> Result<Vec<MonthlySnapshot>, LedgerError> {
        self.repo.get_record(id).await?;
        Ok(self.repo.list_snapshots(Some(id)).await?)
    }

    pub async fn report(&self) -> Result<WageReport, LedgerError> {
        let snapshots = self.repo.list_snapshots(None).await?;
        debug!(snapshots = snapshots.len(), "Building wage report");
        Ok(WageReport::from_snapshots(&snapshots))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::models::{RecordTerms, Vehicle};

    // ── in-memory repository ─────────────────────────────────────────────
    #[derive(Default)]
    struct MemoryRepository {
        records: Mutex<Vec<CompensationRecord>>,
        snapshots: Mutex<Vec<MonthlySnapshot>>,
    }

    impl MemoryRepository {
        fn append(
            &self,
            record: &CompensationRecord,
            snapshot: &NewSnapshot,
        ) {
            let mut snapshots = self.snapshots.lock().unwrap();
            let id = snapshots.len() as i64 + 1;
            snapshots.push(MonthlySnapshot {
                id,
                record_id: record.id,
                name: record.profile.name.clone(),
                month: snapshot.month.clone(),
                total_compensation: snapshot.total_compensation,
                commute_cost: snapshot.commute_cost,
                work_hours: snapshot.work_hours,
                real_hourly_wage: snapshot.real_hourly_wage,
            });
        }
    }

    #[async_trait]
    impl CompensationRepository for MemoryRepository {
        async fn create_record(
            &self,
            profile: &CompensationProfile,
            snapshot: &NewSnapshot,
        ) -> Result<CompensationRecord, RepositoryError> {
            let record = {
                let mut records = self.records.lock().unwrap();
                let record = CompensationRecord {
                    id: records.len() as i64 + 1,
                    profile: profile.clone(),
                    real_hourly_wage: snapshot.real_hourly_wage,
                    created_at: Utc::now(),
                };
                records.push(record.clone());
                record
            };
            self.append(&record, snapshot);
            Ok(record)
        }

        async fn get_record(&self, id: i64) -> Result<CompensationRecord, RepositoryError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn list_records(&self) -> Result<Vec<CompensationRecord>, RepositoryError> {
            let mut records = self.records.lock().unwrap().clone();
            records.reverse();
            Ok(records)
        }

        async fn update_record(
            &self,
            id: i64,
            terms: &RecordTerms,
            snapshot: &NewSnapshot,
        ) -> Result<CompensationRecord, RepositoryError> {
            let record = {
                let mut records = self.records.lock().unwrap();
                let record = records
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(RepositoryError::NotFound)?;
                record.profile = record.profile.with_terms(terms);
                record.real_hourly_wage = snapshot.real_hourly_wage;
                record.clone()
            };
            self.append(&record, snapshot);
            Ok(record)
        }

        async fn list_snapshots(
            &self,
            record_id: Option<i64>,
        ) -> Result<Vec<MonthlySnapshot>, RepositoryError> {
            Ok(self
                .snapshots
                .lock()
                .unwrap()
                .iter()
                .filter(|s| record_id.is_none_or(|id| s.record_id == id))
                .cloned()
                .collect())
        }
    }

    fn test_profile(name: &str) -> CompensationProfile {
        CompensationProfile {
            name: name.to_string(),
            salary: dec!(120000),
            rsu: dec!(0),
            match_401k_percent: dec!(0),
            bonus_percent: dec!(0),
            commute_minutes: dec!(20),
            commute_miles: dec!(10),
            vehicle: Vehicle::Gas {
                price_per_gallon: dec!(4),
                miles_per_gallon: dec!(25),
            },
            vehicle_cost: dec!(30000),
            vehicle_lifetime_miles: dec!(100000),
            daily_hours: dec!(8),
        }
    }

    fn june() -> MonthLabel {
        MonthLabel::parse("2025-06").unwrap()
    }

    // =========================================================================
    // submit tests
    // =========================================================================

    #[tokio::test]
    async fn submit_stores_record_and_first_snapshot() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);

        let submission = ledger.submit(&test_profile("Avery"), &june()).await.unwrap();

        assert_eq!(submission.record.id, 1);
        assert_eq!(round_half_up(submission.record.real_hourly_wage), dec!(52.19));
        let history = ledger.history(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].real_hourly_wage, submission.record.real_hourly_wage);
        assert_eq!(round_half_up(history[0].work_hours), dec!(2253.33));
    }

    #[tokio::test]
    async fn submit_writes_nothing_when_calculation_fails() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);
        let profile = CompensationProfile {
            vehicle_lifetime_miles: dec!(0),
            ..test_profile("Avery")
        };

        let err = ledger.submit(&profile, &june()).await.unwrap_err();

        assert_eq!(
            err,
            LedgerError::Calculation(CalculationError::NonPositiveLifetimeMileage(dec!(0)))
        );
        assert!(ledger.records().await.unwrap().is_empty());
    }

    // =========================================================================
    // update tests
    // =========================================================================

    #[tokio::test]
    async fn update_with_identical_terms_keeps_wage_and_appends_one_snapshot() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);
        let stored = ledger.submit(&test_profile("Avery"), &june()).await.unwrap().record;

        let updated = ledger
            .update(stored.id, &TermChanges::default(), &june())
            .await
            .unwrap()
            .record;

        assert_eq!(updated.real_hourly_wage, stored.real_hourly_wage);
        assert_eq!(updated.profile, stored.profile);
        assert_eq!(ledger.history(stored.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_changes_only_terms() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);
        let stored = ledger.submit(&test_profile("Avery"), &june()).await.unwrap().record;
        let changes = TermChanges {
            salary: Some(dec!(130000)),
            ..Default::default()
        };

        let submission = ledger.update(stored.id, &changes, &june()).await.unwrap();

        assert_eq!(submission.record.profile.salary, dec!(130000));
        assert_eq!(submission.record.profile.daily_hours, dec!(8));
        assert_eq!(submission.record.profile.vehicle, stored.profile.vehicle);
        assert!(submission.record.real_hourly_wage > stored.real_hourly_wage);
        assert_eq!(submission.result.breakdown.real_hourly_wage, submission.record.real_hourly_wage);
    }

    #[tokio::test]
    async fn same_month_updates_repeat_the_month_label() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);
        let stored = ledger.submit(&test_profile("Avery"), &june()).await.unwrap().record;

        for salary in [dec!(125000), dec!(130000)] {
            let changes = TermChanges {
                salary: Some(salary),
                ..Default::default()
            };
            ledger.update(stored.id, &changes, &june()).await.unwrap();
        }

        let months: Vec<_> = ledger
            .history(stored.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.month)
            .collect();
        assert_eq!(months, vec![june(), june(), june()]);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);

        let err = ledger
            .update(42, &TermChanges::default(), &june())
            .await
            .unwrap_err();

        assert_eq!(err, LedgerError::Repository(RepositoryError::NotFound));
        assert!(repo.snapshots.lock().unwrap().is_empty());
    }

    // =========================================================================
    // report tests
    // =========================================================================

    #[tokio::test]
    async fn report_ranks_people_by_latest_wage() {
        let repo = MemoryRepository::default();
        let ledger = CompensationLedger::new(&repo);
        ledger.submit(&test_profile("Avery"), &june()).await.unwrap();
        let higher = CompensationProfile {
            salary: dec!(150000),
            ..test_profile("Blake")
        };
        ledger.submit(&higher, &june()).await.unwrap();

        let report = ledger.report().await.unwrap();

        let names: Vec<_> = report.summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Blake", "Avery"]);
        assert_eq!(report.trend.map(|t| t.name), Some("Blake".to_string()));
    }
}
