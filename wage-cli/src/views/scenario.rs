//! Text rendering of scenario results and current-vs-alternative
//! comparisons.

use std::io::{self, Write};

use rust_decimal::Decimal;
use wage_core::CommuteScenario;
use wage_core::calculations::{
    CommuteComparison, CostComponent, MetricDelta, ScenarioCalculator, ScenarioResult,
};

use crate::utils::{
    format_fixed, format_grouped, format_money, format_signed, format_signed_money,
};

const RULE: &str = "============================================================";

pub fn render_result<W: Write>(
    out: &mut W,
    title: &str,
    calculator: &ScenarioCalculator<'_>,
    scenario: &CommuteScenario,
    result: &ScenarioResult,
) -> io::Result<()> {
    let schedule = calculator.schedule();
    let breakdown = &result.breakdown;
    let metrics = &result.metrics;

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Pay: {} {}",
        format_money(schedule.pay),
        schedule.pay_frequency.label().to_ascii_lowercase()
    )?;
    writeln!(out, "Transportation: {}", scenario.transport.label())?;
    if scenario.transport.travels_own_distance() {
        writeln!(
            out,
            "Round Trip Distance: {} miles",
            format_fixed(scenario.one_way_miles * Decimal::TWO, 1)
        )?;
    }
    writeln!(out, "Daily Cost Breakdown: {}", cost_breakdown(&metrics.mode_cost))?;
    if scenario.additional_daily_cost > Decimal::ZERO {
        writeln!(
            out,
            "+ Additional Costs: {}",
            format_money(scenario.additional_daily_cost)
        )?;
    }
    writeln!(
        out,
        "Total Daily Commute Cost: {}",
        format_money(metrics.daily_commute_cost)
    )?;

    writeln!(out)?;
    writeln!(out, "WAGES:")?;
    writeln!(
        out,
        "   Traditional Hourly Wage: {}",
        format_money(breakdown.nominal_hourly_wage)
    )?;
    writeln!(
        out,
        "   True Hourly Wage: {}",
        format_money(breakdown.real_hourly_wage)
    )?;
    writeln!(
        out,
        "   Commute reduces wage by {}/hr",
        format_money(breakdown.wage_difference())
    )?;

    writeln!(out)?;
    writeln!(out, "TIME:")?;
    let hours = [
        ("Daily Work Hours", format_fixed(schedule.daily_hours, 1), "hrs"),
        ("Daily Commute Time", format_fixed(metrics.daily_commute_hours, 1), "hrs"),
        ("Commute Days per Week", format_fixed(metrics.commute_days_per_week, 0), "days"),
        ("WFH Days per Week", format_fixed(schedule.wfh_days_per_week, 0), "days"),
        (
            "Weekly Work Hours",
            format_fixed(schedule.daily_hours * schedule.work_days_per_week, 1),
            "hrs",
        ),
        ("Weekly Commute Hours", format_fixed(metrics.weekly_commute_hours(), 1), "hrs"),
        ("Yearly Work Hours", format_grouped(breakdown.annual_work_hours, 0), "hrs"),
        ("Yearly Commute Hours", format_grouped(metrics.yearly_commute_hours, 0), "hrs"),
        (
            "Total Committed Hours/Year",
            format_grouped(breakdown.committed_hours(), 0),
            "hrs",
        ),
    ];
    for (label, value, unit) in hours {
        writeln!(out, "   {label}: {value} {unit}")?;
    }

    writeln!(out)?;
    writeln!(out, "YEARLY:")?;
    writeln!(out, "   Annual Income: {}", format_money(breakdown.total_compensation))?;
    writeln!(out, "   Commute Costs: {}", format_money(breakdown.annual_commute_cost))?;
    writeln!(out, "   Net Income: {}", format_money(breakdown.net_compensation))?;
    if let Some(share) = result.commute_cost_share() {
        writeln!(
            out,
            "   Commute costs consume {}% of your take-home pay",
            format_fixed(share, 1)
        )?;
    }

    if let Some(paycheck) = calculator.paycheck_perspective(metrics) {
        writeln!(out)?;
        writeln!(out, "PAYCHECK (bi-weekly):")?;
        writeln!(
            out,
            "   Take-home: {} | Commute costs: {} | Effective: {}",
            format_money(paycheck.paycheck),
            format_money(paycheck.commute_cost),
            format_money(paycheck.effective_pay)
        )?;
        writeln!(
            out,
            "   Commute time: {} hours | Commute eats {}% of your paycheck",
            format_fixed(paycheck.commute_hours, 1),
            format_fixed(paycheck.cost_percent, 1)
        )?;
    }
    writeln!(out, "{RULE}")
}

fn cost_breakdown(component: &CostComponent) -> String {
    match component {
        CostComponent::None => component.label().to_string(),
        _ => format!("{}: {}", component.label(), format_money(component.amount())),
    }
}

/// Side-by-side table. Time and cost differences are savings (current minus
/// alternative); the wage difference is the gain from switching.
pub fn render_comparison<W: Write>(
    out: &mut W,
    current: &CommuteScenario,
    alternative: &CommuteScenario,
    comparison: &CommuteComparison,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "COMPARISON: {} -> {}",
        current.transport.label(),
        alternative.transport.label()
    )?;
    writeln!(out, "{}", "-".repeat(66))?;
    row(out, "Metric", "Current", "Alternative", "Difference")?;

    let hours = |value: Decimal, dp: u32| format!("{} hrs", format_fixed(value, dp));
    let signed_hours = |value: Decimal, dp: u32| format!("{} hrs", format_signed(value, dp));

    let delta = &comparison.daily_commute_hours;
    row(
        out,
        "Daily Commute Time",
        &hours(delta.current, 1),
        &hours(delta.alternative, 1),
        &signed_hours(delta.savings(), 1),
    )?;
    money_row(out, "Daily Commute Cost", &comparison.daily_commute_cost, |d| d.savings())?;
    let delta = &comparison.yearly_commute_hours;
    row(
        out,
        "Yearly Commute Hours",
        &hours(delta.current, 0),
        &hours(delta.alternative, 0),
        &signed_hours(delta.savings(), 0),
    )?;
    money_row(out, "Yearly Commute Costs", &comparison.yearly_commute_cost, |d| d.savings())?;
    money_row(out, "True Hourly Wage", &comparison.true_hourly_wage, |d| d.change())?;

    writeln!(out)?;
    let wage = &comparison.true_hourly_wage;
    let percent = wage
        .change_percent()
        .map(|p| format!(" ({}%)", format_signed(p, 1)))
        .unwrap_or_default();
    if comparison.is_favorable() {
        writeln!(
            out,
            "Switching raises your true hourly wage by {}{percent}",
            format_money(wage.change())
        )
    } else if wage.change() < Decimal::ZERO {
        writeln!(
            out,
            "Switching lowers your true hourly wage by {}{percent}",
            format_money(-wage.change())
        )
    } else {
        writeln!(out, "Switching leaves your true hourly wage unchanged")
    }
}

fn money_row<W: Write>(
    out: &mut W,
    label: &str,
    delta: &MetricDelta,
    difference: impl Fn(&MetricDelta) -> Decimal,
) -> io::Result<()> {
    row(
        out,
        label,
        &format_money(delta.current),
        &format_money(delta.alternative),
        &format_signed_money(difference(delta)),
    )
}

fn row<W: Write>(
    out: &mut W,
    label: &str,
    current: &str,
    alternative: &str,
    difference: &str,
) -> io::Result<()> {
    writeln!(out, "{label:<24}{current:>14}{alternative:>14}{difference:>14}")
}
