use std::io::{self, Write};

use wage_core::WageReport;

use crate::utils::format_fixed;

pub fn render<W: Write>(
    out: &mut W,
    report: &WageReport,
) -> io::Result<()> {
    let rule = "=".repeat(80);

    writeln!(out)?;
    writeln!(out, "COMPREHENSIVE REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "REAL HOURLY WAGE SUMMARY:")?;
    writeln!(out, "{}", "-".repeat(60))?;

    if report.is_empty() {
        writeln!(out, "No calculations recorded yet.")?;
    }
    for summary in &report.summaries {
        writeln!(
            out,
            "{:<20} Latest: ${:>7} | Max: ${:>7} | Avg: ${:>7} | Entries: {}",
            summary.name,
            format_fixed(summary.latest_wage, 2),
            format_fixed(summary.max_wage, 2),
            format_fixed(summary.average_wage, 2),
            summary.snapshot_count,
        )?;
    }

    if let Some(trend) = &report.trend {
        writeln!(out)?;
        writeln!(out, "MONTHLY TREND for {}:", trend.name)?;
        writeln!(out, "{}", "-".repeat(40))?;
        for point in &trend.points {
            writeln!(
                out,
                "  {}: ${}",
                point.month,
                format_fixed(point.real_hourly_wage, 2)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")
}
