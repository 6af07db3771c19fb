//! Integration tests that exercise the loader against an on-disk fixture
//! file, and the import command that stores what it loads.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying the full read-from-disk path.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wage_cli::{app, csv_loader};
use wage_core::calculations::common::round_half_up;
use wage_core::db::DbConfig;
use wage_core::{CompensationLedger, Vehicle, VehicleKind};

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_profiles.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let profiles =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error");

    // The fixture has exactly 3 rows.
    assert_eq!(profiles.len(), 3);
}

#[test]
fn test_load_fixture_first_row_gas() {
    let profiles = csv_loader::load_from_file(&fixture_path()).unwrap();
    let p = &profiles[0];

    assert_eq!(p.name, "Avery");
    assert_eq!(p.salary, dec!(120000));
    assert_eq!(p.commute_minutes, dec!(20));
    assert_eq!(p.commute_miles, dec!(10));
    assert_eq!(
        p.vehicle,
        Vehicle::Gas {
            price_per_gallon: dec!(4),
            miles_per_gallon: dec!(25),
        }
    );
    assert_eq!(p.vehicle_lifetime_miles, dec!(100000));
}

#[test]
fn test_load_fixture_second_row_electric() {
    let profiles = csv_loader::load_from_file(&fixture_path()).unwrap();
    let p = &profiles[1];

    assert_eq!(p.vehicle.kind(), VehicleKind::Electric);
    assert_eq!(p.vehicle.electric_efficiency(), Some(dec!(3.5)));
    assert_eq!(p.vehicle.gas_mileage(), None);
    assert_eq!(p.rsu, dec!(12500));
    assert_eq!(p.match_401k_percent, dec!(5));
    assert_eq!(p.bonus_percent, dec!(8));
}

#[test]
fn test_load_fixture_third_row_short_code() {
    let profiles = csv_loader::load_from_file(&fixture_path()).unwrap();
    let p = &profiles[2];

    assert_eq!(p.vehicle.kind(), VehicleKind::Gas);
    assert_eq!(p.commute_miles, dec!(0));
    assert_eq!(p.daily_hours, dec!(7.5));
}

#[tokio::test]
async fn test_import_stores_every_fixture_row() {
    let repo = app::open_repository(&DbConfig::new("sqlite", ":memory:"))
        .await
        .expect("in-memory database should open");
    let ledger = CompensationLedger::new(&*repo);
    let mut out = Vec::new();

    let imported = app::import_profiles(&ledger, &fixture_path(), &mut out)
        .await
        .expect("import should succeed");

    assert_eq!(imported, 3);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Row 1: saved Avery with ID 1 (real hourly wage $52.19)"));
    assert!(text.ends_with("Imported 3 of 3 profiles.\n"));

    let report = ledger.report().await.unwrap();
    let ranked: Vec<_> = report
        .summaries
        .iter()
        .map(|s| (s.name.as_str(), round_half_up(s.latest_wage)))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Blake", dec!(53.47)),
            ("Avery", dec!(52.19)),
            ("Casey", dec!(42.26)),
        ]
    );
}

#[tokio::test]
async fn test_import_skips_rows_that_cannot_be_calculated() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("true-wage-import-{}.csv", std::process::id()));
    std::fs::write(
        &path,
        "name,salary,rsu,match_401k,bonus_percent,commute_time_minutes,commute_distance_miles,car_type,fuel_cost,gas_mileage,electric_efficiency,car_cost,car_mileage,daily_hours\n\
         Dana,70000,0,0,0,10,5,gas,4,0,,20000,100000,8\n\
         Evan,70000,0,0,0,10,5,gas,4,30,,20000,100000,8\n",
    )
    .unwrap();
    let repo = app::open_repository(&DbConfig::new("sqlite", ":memory:"))
        .await
        .unwrap();
    let ledger = CompensationLedger::new(&*repo);
    let mut out = Vec::new();

    let imported = app::import_profiles(&ledger, &path, &mut out).await.unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(imported, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Row 1: skipped Dana:"));
    assert_eq!(ledger.records().await.unwrap().len(), 1);
}
