//! Start-up wiring and the non-interactive commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use wage_core::calculations::{CommuteComparison, ScenarioCalculator};
use wage_core::db::{DbConfig, RepositoryRegistry};
use wage_core::{CompensationLedger, CompensationRepository, LedgerError, MonthLabel};
use wage_db_sqlite::SqliteRepositoryFactory;

use crate::utils::format_fixed;
use crate::views::{records, report, results, scenario};
use crate::{csv_loader, scenario_file};

/// Build a registry with every backend compiled into this binary.
pub fn build_registry() -> RepositoryRegistry {
    RepositoryRegistry::new().with(Box::new(SqliteRepositoryFactory))
}

/// Open the store described by `config`, migrated and ready to use.
pub async fn open_repository(config: &DbConfig) -> Result<Box<dyn CompensationRepository>> {
    debug!(backend = %config.backend, "connecting");
    build_registry()
        .open(config)
        .await
        .with_context(|| {
            format!(
                "cannot open {} database '{}'",
                config.backend, config.connection_string
            )
        })
}

pub async fn list_records<S, W>(
    ledger: &CompensationLedger<'_, S>,
    out: &mut W,
) -> Result<()>
where
    S: CompensationRepository + ?Sized,
    W: Write,
{
    let stored = ledger.records().await?;
    records::render(out, &stored)?;
    Ok(())
}

pub async fn print_report<S, W>(
    ledger: &CompensationLedger<'_, S>,
    out: &mut W,
) -> Result<()>
where
    S: CompensationRepository + ?Sized,
    W: Write,
{
    let wage_report = ledger.report().await?;
    report::render(out, &wage_report)?;
    Ok(())
}

/// Recompute stored record `id` in full and print it with its history.
pub async fn show_record<S, W>(
    ledger: &CompensationLedger<'_, S>,
    id: i64,
    out: &mut W,
) -> Result<()>
where
    S: CompensationRepository + ?Sized,
    W: Write,
{
    let record = ledger
        .record(id)
        .await
        .with_context(|| format!("cannot show record {id}"))?;
    let result = ledger
        .recalculate(&record)
        .with_context(|| format!("cannot recompute record {id}"))?;
    results::render(out, &record.profile, &result)?;
    records::render_history(out, &ledger.history(id).await?)?;
    Ok(())
}

/// Submit every profile in the CSV at `path` for the current month.
///
/// The whole file is parsed before anything is stored. A row whose figures
/// cannot be calculated is skipped and reported; a storage failure stops
/// the import. Returns how many rows were stored.
pub async fn import_profiles<S, W>(
    ledger: &CompensationLedger<'_, S>,
    path: &Path,
    out: &mut W,
) -> Result<usize>
where
    S: CompensationRepository + ?Sized,
    W: Write,
{
    let profiles = csv_loader::load_from_file(path)
        .with_context(|| format!("cannot import '{}'", path.display()))?;
    let month = MonthLabel::current();

    let mut imported = 0;
    for (idx, profile) in profiles.iter().enumerate() {
        let row = idx + 1;
        match ledger.submit(profile, &month).await {
            Ok(submission) => {
                imported += 1;
                writeln!(
                    out,
                    "Row {row}: saved {} with ID {} (real hourly wage ${})",
                    profile.name,
                    submission.record.id,
                    format_fixed(submission.record.real_hourly_wage, 2)
                )?;
            }
            Err(LedgerError::Calculation(e)) => {
                warn!(row, name = %profile.name, error = %e, "skipping CSV row");
                writeln!(out, "Row {row}: skipped {}: {e}", profile.name)?;
            }
            Err(e) => return Err(e).with_context(|| format!("import stopped at row {row}")),
        }
    }

    info!(imported, total = profiles.len(), path = %path.display(), "CSV import finished");
    writeln!(out, "Imported {imported} of {} profiles.", profiles.len())?;
    Ok(imported)
}

/// What `run_scenario` compares the current commute against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareWith {
    /// Price the current commute only.
    Nothing,
    /// The file's `[alternative]`, or a copy of the current commute when the
    /// file has none.
    Alternative,
    /// A fresh copy of the current commute, ignoring any `[alternative]`.
    CurrentCopy,
}

/// Price the commute(s) in the scenario file at `path`.
///
/// A compared commute is priced against the current income and hours.
pub fn run_scenario<W: Write>(
    path: &Path,
    compare: CompareWith,
    out: &mut W,
) -> Result<()> {
    let file = scenario_file::load_from_file(path)
        .with_context(|| format!("cannot load '{}'", path.display()))?;
    let pair = match compare {
        CompareWith::CurrentCopy => file.pair().synced(),
        CompareWith::Nothing | CompareWith::Alternative => file.pair(),
    };

    let calculator = ScenarioCalculator::new(&file.schedule).context("invalid work schedule")?;
    let current = calculator
        .calculate(&pair.current)
        .context("invalid current commute")?;
    scenario::render_result(out, "CURRENT COMMUTE", &calculator, &pair.current, &current)?;

    if compare != CompareWith::Nothing {
        let comparison = CommuteComparison::between(&calculator, &current, &pair.alternative)
            .context("invalid alternative commute")?;
        scenario::render_result(
            out,
            "ALTERNATIVE COMMUTE",
            &calculator,
            &pair.alternative,
            &comparison.alternative,
        )?;
        scenario::render_comparison(out, &pair.current, &pair.alternative, &comparison)?;
    }
    Ok(())
}
