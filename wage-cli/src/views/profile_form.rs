//! The ten numbered prompts that build a [`CompensationProfile`].

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use wage_core::{CompensationProfile, Vehicle, VehicleKind};

use crate::console::{Console, InputError};
use crate::utils::parse_decimal;

/// Prompts for every profile field in order.
///
/// The first bad answer aborts the whole form; nothing is kept.
pub fn collect<R: BufRead, W: Write>(
    console: &mut Console<R, W>
) -> Result<CompensationProfile, InputError> {
    writeln!(console.out(), "=== Compensation Analysis Tool ===")?;
    writeln!(console.out())?;

    let name = console.prompt("1. Enter your name: ")?;
    if name.is_empty() {
        return Err(InputError::Empty);
    }
    let salary = console.prompt_decimal("2. Enter your annual salary ($): ")?;
    let rsu = console.prompt_decimal("3. Enter your RSU value (annual $): ")?;
    let match_401k_percent =
        console.prompt_decimal("4. Enter 401k match percentage (e.g., 4 for 4%): ")?;
    let bonus_percent =
        console.prompt_decimal("5. Enter bonus percentage (e.g., 10 for 10%): ")?;
    let commute_minutes =
        console.prompt_decimal("6. Enter average one-way commute time (minutes): ")?;
    let commute_miles =
        console.prompt_decimal("7. Enter average one-way commute distance (miles): ")?;

    let vehicle = collect_vehicle(console)?;

    let answer = console
        .prompt("9. Enter car cost with mileage (format: 'cost,mileage' e.g., '30000,150000'): ")?;
    let (vehicle_cost, vehicle_lifetime_miles) = parse_cost_and_mileage(&answer)?;

    let daily_hours = console.prompt_decimal("10. Enter average hours worked per day: ")?;

    Ok(CompensationProfile {
        name,
        salary,
        rsu,
        match_401k_percent,
        bonus_percent,
        commute_minutes,
        commute_miles,
        vehicle,
        vehicle_cost,
        vehicle_lifetime_miles,
        daily_hours,
    })
}

fn collect_vehicle<R: BufRead, W: Write>(
    console: &mut Console<R, W>
) -> Result<Vehicle, InputError> {
    writeln!(console.out())?;
    writeln!(console.out(), "8. Car Type:")?;
    writeln!(console.out(), "   g - Gas car")?;
    writeln!(console.out(), "   e - Electric car")?;
    let choice = console.prompt("   Enter your choice (g/e): ")?;

    match VehicleKind::parse(&choice) {
        Some(VehicleKind::Gas) => Ok(Vehicle::Gas {
            price_per_gallon: console.prompt_decimal("   Enter average gas price per gallon ($): ")?,
            miles_per_gallon: console
                .prompt_decimal("   Enter your car's gas mileage (miles per gallon): ")?,
        }),
        Some(VehicleKind::Electric) => Ok(Vehicle::Electric {
            price_per_kwh: console
                .prompt_decimal("   Enter average electricity cost per kWh ($): ")?,
            miles_per_kwh: console
                .prompt_decimal("   Enter your car's efficiency (miles per kWh): ")?,
        }),
        None => Err(InputError::InvalidChoice(choice)),
    }
}

/// Splits `"cost,mileage"`. Both halves are plain numbers, so no thousands
/// separators here.
pub fn parse_cost_and_mileage(input: &str) -> Result<(Decimal, Decimal), InputError> {
    let invalid = || InputError::InvalidFormat {
        expected: "'cost,mileage'",
        input: input.trim().to_string(),
    };
    let (cost, mileage) = input.split_once(',').ok_or_else(invalid)?;
    if cost.trim().is_empty() || mileage.trim().is_empty() || mileage.contains(',') {
        return Err(invalid());
    }
    Ok((parse_decimal(cost)?, parse_decimal(mileage)?))
}
