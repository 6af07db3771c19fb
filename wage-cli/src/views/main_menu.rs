//! The numbered 1–5 menu that drives an interactive session.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};
use wage_core::{CompensationLedger, CompensationRepository, LedgerError, MonthLabel, RepositoryError};

use crate::console::{Console, InputError};
use crate::views::{profile_form, records, report, results, update_form};

const RULE: &str = "============================================================";

/// Why a single menu action stopped early.
#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<io::Error> for ActionError {
    fn from(e: io::Error) -> Self {
        Self::Input(InputError::Io(e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    NewEntry,
    ViewRecords,
    UpdateRecord,
    Report,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::NewEntry),
            "2" => Some(Self::ViewRecords),
            "3" => Some(Self::UpdateRecord),
            "4" => Some(Self::Report),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user picks Exit or input ends.
///
/// A failed action is reported and the menu shown again; only I/O failure
/// on the console itself is returned.
pub async fn run<R, W, S>(
    console: &mut Console<R, W>,
    ledger: &CompensationLedger<'_, S>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: CompensationRepository + ?Sized,
{
    loop {
        print_menu(console.out())?;
        let answer = match console.prompt("\nEnter your choice (1-5): ") {
            Ok(answer) => answer,
            Err(InputError::Closed) => return Ok(()),
            Err(InputError::Io(e)) => return Err(e),
            Err(e) => {
                writeln!(console.out(), "{e}")?;
                continue;
            }
        };

        let outcome = match MenuChoice::parse(&answer) {
            Some(MenuChoice::NewEntry) => new_entry(console, ledger).await,
            Some(MenuChoice::ViewRecords) => view_records(console, ledger).await.map(|_| ()),
            Some(MenuChoice::UpdateRecord) => update_record(console, ledger).await,
            Some(MenuChoice::Report) => show_report(console, ledger).await,
            Some(MenuChoice::Exit) => return Ok(()),
            None => {
                writeln!(console.out(), "Invalid choice. Please try again.")?;
                continue;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(ActionError::Input(InputError::Closed)) => return Ok(()),
            Err(ActionError::Input(InputError::Io(e))) => return Err(e),
            Err(e) => {
                warn!(error = %e, "menu action failed");
                writeln!(console.out())?;
                writeln!(console.out(), "Error: {e}")?;
            }
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "COMPENSATION ANALYSIS TOOL")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "1. Enter new compensation data")?;
    writeln!(out, "2. View all records")?;
    writeln!(out, "3. Update existing record")?;
    writeln!(out, "4. Generate report")?;
    writeln!(out, "5. Exit")
}

async fn new_entry<R, W, S>(
    console: &mut Console<R, W>,
    ledger: &CompensationLedger<'_, S>,
) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CompensationRepository + ?Sized,
{
    let profile = profile_form::collect(console)?;
    let submission = ledger.submit(&profile, &MonthLabel::current()).await?;

    results::render(console.out(), &profile, &submission.result)?;
    writeln!(console.out())?;
    writeln!(console.out(), "Record saved with ID: {}", submission.record.id)?;
    Ok(())
}

/// Lists the records and reports whether there were any.
async fn view_records<R, W, S>(
    console: &mut Console<R, W>,
    ledger: &CompensationLedger<'_, S>,
) -> Result<bool, ActionError>
where
    R: BufRead,
    W: Write,
    S: CompensationRepository + ?Sized,
{
    let stored = ledger.records().await?;
    records::render(console.out(), &stored)?;
    Ok(!stored.is_empty())
}

async fn update_record<R, W, S>(
    console: &mut Console<R, W>,
    ledger: &CompensationLedger<'_, S>,
) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CompensationRepository + ?Sized,
{
    if !view_records(console, ledger).await? {
        return Ok(());
    }

    let answer = console.prompt("\nEnter record ID to update: ")?;
    let Ok(id) = answer.parse::<i64>() else {
        writeln!(console.out(), "Invalid record ID.")?;
        return Ok(());
    };

    let record = match ledger.record(id).await {
        Ok(record) => record,
        Err(LedgerError::Repository(RepositoryError::NotFound)) => {
            debug!(record_id = id, "update requested for unknown record");
            writeln!(console.out(), "Record ID {id} not found.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let changes = update_form::collect(console, &record)?;
    let submission = ledger.update(id, &changes, &MonthLabel::current()).await?;

    writeln!(console.out())?;
    writeln!(console.out(), "Record {id} updated successfully!")?;

    if console.confirm("\nShow updated results? (y/n): ")? {
        results::render(console.out(), &submission.record.profile, &submission.result)?;
    }
    Ok(())
}

async fn show_report<R, W, S>(
    console: &mut Console<R, W>,
    ledger: &CompensationLedger<'_, S>,
) -> Result<(), ActionError>
where
    R: BufRead,
    W: Write,
    S: CompensationRepository + ?Sized,
{
    let wage_report = ledger.report().await?;
    report::render(console.out(), &wage_report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_choices_parse_one_through_five() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::NewEntry));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::ViewRecords));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::UpdateRecord));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Report));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn io_errors_convert_to_fatal_input_errors() {
        let error: ActionError = io::Error::other("broken pipe").into();

        assert!(matches!(error, ActionError::Input(ref e) if e.is_fatal()));
    }
}
