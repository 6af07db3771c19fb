use std::io::{self, Write};

use rust_decimal::Decimal;
use wage_core::CompensationProfile;
use wage_core::calculations::ProfileWageResult;

use crate::utils::{format_fixed, format_grouped, format_money, format_signed, format_signed_money};

const RULE: &str = "============================================================";

/// Prints the full breakdown of one profile calculation.
pub fn render<W: Write>(
    out: &mut W,
    profile: &CompensationProfile,
    result: &ProfileWageResult,
) -> io::Result<()> {
    let breakdown = &result.breakdown;
    let commute = &result.commute;
    let daily_commute_hours =
        profile.commute_minutes * Decimal::TWO / Decimal::from(60);

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "COMPENSATION ANALYSIS RESULTS")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Employee: {}", profile.name)?;
    writeln!(
        out,
        "Car Type: {}",
        profile.vehicle.kind().as_str().to_ascii_uppercase()
    )?;

    writeln!(out)?;
    writeln!(out, "COMPENSATION BREAKDOWN:")?;
    writeln!(out, "   Base Salary: {}", format_money(profile.salary))?;
    writeln!(out, "   RSU: {}", format_money(profile.rsu))?;
    writeln!(
        out,
        "   Bonus ({}%): {}",
        profile.bonus_percent.normalize(),
        format_money(result.bonus_amount)
    )?;
    writeln!(
        out,
        "   401k Match ({}%): {}",
        profile.match_401k_percent.normalize(),
        format_money(result.match_401k_amount)
    )?;
    writeln!(out, "   ------------------------------------")?;
    writeln!(
        out,
        "   TOTAL COMPENSATION: {}",
        format_money(breakdown.total_compensation)
    )?;

    writeln!(out)?;
    writeln!(out, "COMMUTE COSTS (Annual):")?;
    writeln!(out, "   Daily Fuel: {}", format_money(commute.daily_fuel))?;
    writeln!(
        out,
        "   Daily Depreciation: {}",
        format_money(commute.daily_depreciation)
    )?;
    writeln!(out, "   Daily Total: {}", format_money(commute.daily_total))?;
    writeln!(
        out,
        "   Annual Commute Cost: {}",
        format_money(breakdown.annual_commute_cost)
    )?;

    writeln!(out)?;
    writeln!(out, "TIME ANALYSIS:")?;
    writeln!(out, "   Daily Work Hours: {}", format_fixed(profile.daily_hours, 1))?;
    writeln!(out, "   Daily Commute Hours: {}", format_fixed(daily_commute_hours, 1))?;
    writeln!(
        out,
        "   Total Daily Hours: {}",
        format_fixed(profile.daily_hours + daily_commute_hours, 1)
    )?;
    writeln!(
        out,
        "   Annual Work Hours: {}",
        format_grouped(breakdown.committed_hours(), 1)
    )?;

    writeln!(out)?;
    writeln!(out, "NET ANALYSIS:")?;
    writeln!(
        out,
        "   Net Compensation: {}",
        format_money(breakdown.net_compensation)
    )?;
    writeln!(
        out,
        "   REAL HOURLY WAGE: {}",
        format_money(breakdown.real_hourly_wage)
    )?;

    writeln!(out)?;
    writeln!(out, "COMPARISON:")?;
    writeln!(
        out,
        "   Nominal Hourly Wage: {}",
        format_money(breakdown.nominal_hourly_wage)
    )?;
    // Printed as real minus nominal, so a costly commute reads negative.
    let difference = -breakdown.wage_difference();
    match breakdown.difference_percent() {
        Some(percent) => writeln!(
            out,
            "   Difference: {} ({}%)",
            format_signed_money(difference),
            format_signed(-percent, 1)
        )?,
        None => writeln!(out, "   Difference: {}", format_signed_money(difference))?,
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use wage_core::Vehicle;
    use wage_core::calculations::WageCalculator;

    use super::*;

    fn profile() -> CompensationProfile {
        CompensationProfile {
            name: "Avery".to_string(),
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

    fn rendered(profile: &CompensationProfile) -> String {
        let result = WageCalculator::default().calculate(profile).unwrap();
        let mut out = Vec::new();
        render(&mut out, profile, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_commute_costs_and_real_wage() {
        let text = rendered(&profile());

        assert!(text.contains("Car Type: GAS"));
        assert!(text.contains("   Daily Fuel: $3.20"));
        assert!(text.contains("   Daily Depreciation: $6.00"));
        assert!(text.contains("   Daily Total: $9.20"));
        assert!(text.contains("   Annual Commute Cost: $2,392.00"));
        assert!(text.contains("   Annual Work Hours: 2,253.3"));
        assert!(text.contains("   Net Compensation: $117,608.00"));
        assert!(text.contains("   REAL HOURLY WAGE: $52.19"));
    }

    #[test]
    fn comparison_reads_negative_when_commute_costs() {
        let text = rendered(&profile());

        assert!(text.contains("   Nominal Hourly Wage: $57.69"));
        assert!(text.contains("   Difference: -$5.50 (-9.5%)"));
    }

    #[test]
    fn zero_hours_skip_the_percentage() {
        let mut profile = profile();
        profile.daily_hours = dec!(0);
        profile.commute_minutes = dec!(0);

        let text = rendered(&profile);

        assert!(text.contains("   REAL HOURLY WAGE: $0.00"));
        assert!(text.contains("   Difference: +$0.00\n"));
    }
}
