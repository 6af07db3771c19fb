use std::io::{self, Write};

use wage_core::{CompensationRecord, MonthlySnapshot};

use crate::utils::{format_fixed, format_grouped};

/// Prints one line per stored record, in the order given.
pub fn render<W: Write>(
    out: &mut W,
    records: &[CompensationRecord],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "DATABASE RECORDS")?;
    writeln!(out, "{}", "-".repeat(80))?;

    if records.is_empty() {
        return writeln!(out, "No records found in the database.");
    }

    for record in records {
        writeln!(
            out,
            "ID: {} | Name: {} | Date: {} | Real Hourly: ${} | Salary: ${} | RSU: ${}",
            record.id,
            record.profile.name,
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            format_fixed(record.real_hourly_wage, 2),
            format_grouped(record.profile.salary, 0),
            format_grouped(record.profile.rsu, 0),
        )?;
    }
    Ok(())
}

/// Prints the snapshot history of one record, oldest first.
pub fn render_history<W: Write>(
    out: &mut W,
    snapshots: &[MonthlySnapshot],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "HISTORY:")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for snapshot in snapshots {
        writeln!(
            out,
            "  {}: ${} (compensation ${}, commute ${}, {} hours)",
            snapshot.month,
            format_fixed(snapshot.real_hourly_wage, 2),
            format_grouped(snapshot.total_compensation, 0),
            format_grouped(snapshot.commute_cost, 2),
            format_grouped(snapshot.work_hours, 1),
        )?;
    }
    Ok(())
}
