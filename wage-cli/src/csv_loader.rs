//! CSV loader for bulk profile import.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter.
//! Header names are case-sensitive.
//!
//! | Column                   | Required | Type    | Notes                                  |
//! |--------------------------|----------|---------|----------------------------------------|
//! | `name`                   | yes      | string  |                                        |
//! | `salary`                 | yes      | decimal | annual                                 |
//! | `rsu`                    | yes      | decimal | annual RSU value                       |
//! | `match_401k`             | yes      | decimal | percent of salary, `4` means 4%        |
//! | `bonus_percent`          | yes      | decimal | percent of salary                      |
//! | `commute_time_minutes`   | yes      | decimal | one way                                |
//! | `commute_distance_miles` | yes      | decimal | one way                                |
//! | `car_type`               | yes      | string  | `gas`/`g` or `electric`/`e`            |
//! | `fuel_cost`              | yes      | decimal | per gallon or per kWh                  |
//! | `gas_mileage`            | gas      | decimal | miles per gallon                       |
//! | `electric_efficiency`    | electric | decimal | miles per kWh                          |
//! | `car_cost`               | yes      | decimal | purchase price                         |
//! | `car_mileage`            | yes      | decimal | expected lifetime miles                |
//! | `daily_hours`            | yes      | decimal | hours worked per day                   |
//!
//! Only the efficiency column matching `car_type` is read; leave the other
//! one empty.
//!
//! ### Example
//!
//! ```csv
//! name,salary,rsu,match_401k,bonus_percent,commute_time_minutes,commute_distance_miles,car_type,fuel_cost,gas_mileage,electric_efficiency,car_cost,car_mileage,daily_hours
//! Avery,120000,0,0,0,20,10,gas,4.00,25,,30000,100000,8
//! Blake,95000,12500,5,8,15,12,electric,0.15,,3.5,45000,200000,8
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use wage_core::{CompensationProfile, Vehicle, VehicleKind};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    salary: Decimal,
    rsu: Decimal,
    match_401k: Decimal,
    bonus_percent: Decimal,
    commute_time_minutes: Decimal,
    commute_distance_miles: Decimal,
    car_type: String,
    fuel_cost: Decimal,
    gas_mileage: Option<Decimal>,
    electric_efficiency: Option<Decimal>,
    car_cost: Decimal,
    car_mileage: Decimal,
    daily_hours: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, a missing required column or a type mismatch.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised car type '{car_type}' on row {row}")]
    InvalidCarType { car_type: String, row: usize },

    /// The efficiency column for the row's car type is empty.
    #[error("missing {column} for {car_type} car on row {row}")]
    MissingEfficiency {
        car_type: &'static str,
        column: &'static str,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CompensationProfile, CsvLoadError> {
    let kind = VehicleKind::parse(&row.car_type).ok_or_else(|| CsvLoadError::InvalidCarType {
        car_type: row.car_type.clone(),
        row: row_number,
    })?;

    let missing = |column| CsvLoadError::MissingEfficiency {
        car_type: kind.as_str(),
        column,
        row: row_number,
    };
    let vehicle = match kind {
        VehicleKind::Gas => Vehicle::Gas {
            price_per_gallon: row.fuel_cost,
            miles_per_gallon: row.gas_mileage.ok_or_else(|| missing("gas_mileage"))?,
        },
        VehicleKind::Electric => Vehicle::Electric {
            price_per_kwh: row.fuel_cost,
            miles_per_kwh: row
                .electric_efficiency
                .ok_or_else(|| missing("electric_efficiency"))?,
        },
    };

    Ok(CompensationProfile {
        name: row.name,
        salary: row.salary,
        rsu: row.rsu,
        match_401k_percent: row.match_401k,
        bonus_percent: row.bonus_percent,
        commute_minutes: row.commute_time_minutes,
        commute_miles: row.commute_distance_miles,
        vehicle,
        vehicle_cost: row.car_cost,
        vehicle_lifetime_miles: row.car_mileage,
        daily_hours: row.daily_hours,
    })
}

/// Parse CSV text and return one profile per data row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [`CsvLoadError::InvalidCarType`] / [`CsvLoadError::MissingEfficiency`]
///   for the first row that cannot become a profile.
pub fn load_from_str(input: &str) -> Result<Vec<CompensationProfile>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Reads `path` from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<CompensationProfile>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
