//! Reading and writing the log's money and time columns.
//!
//! The migrations declare every amount `REAL`, so rows written here always
//! read back as floats. Logs created by earlier tools declared the same
//! columns `NUMERIC`, where a whole-dollar salary or a round commute time is
//! stored as `INTEGER`; those are read as exact whole amounts.

use rust_decimal::Decimal;
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Decode, Row, Type, TypeInfo, ValueRef};
use wage_core::RepositoryError;

/// What SQLite actually holds in an amount column.
enum Stored {
    Empty,
    Whole(i64),
    Fraction(f64),
}

fn stored(row: &SqliteRow, column: &str) -> Result<Stored, RepositoryError> {
    let raw = row
        .try_get_raw(column)
        .map_err(|e| RepositoryError::Database(format!("log has no '{}' column: {}", column, e)))?;
    if raw.is_null() {
        return Ok(Stored::Empty);
    }
    let storage = raw.type_info().name().to_string();

    match storage.as_str() {
        "INTEGER" => read_column(row, column).map(Stored::Whole),
        "REAL" => read_column(row, column).map(Stored::Fraction),
        other => Err(RepositoryError::InvalidRecord(format!(
            "'{}' holds {} instead of an amount",
            column, other
        ))),
    }
}

/// An amount the record cannot do without, such as `salary`.
pub fn read_amount(row: &SqliteRow, column: &str) -> Result<Decimal, RepositoryError> {
    read_optional_amount(row, column)?
        .ok_or_else(|| RepositoryError::InvalidRecord(format!("'{}' is empty", column)))
}

/// An amount only some records carry, such as `gas_mileage` on a gas car.
pub fn read_optional_amount(
    row: &SqliteRow,
    column: &str,
) -> Result<Option<Decimal>, RepositoryError> {
    match stored(row, column)? {
        Stored::Empty => Ok(None),
        Stored::Whole(value) => Ok(Some(Decimal::from(value))),
        Stored::Fraction(value) => Decimal::try_from(value).map(Some).map_err(|_| {
            RepositoryError::InvalidRecord(format!(
                "'{}' holds {}, which is not a usable amount",
                column, value
            ))
        }),
    }
}

/// Any other column: names, ids, car types and timestamps.
pub fn read_column<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::Database(format!("cannot read '{}': {}", column, e)))
}

/// The `REAL` value stored for `amount`.
pub fn to_real(amount: Decimal) -> Result<f64, RepositoryError> {
    f64::try_from(amount).map_err(|_| {
        RepositoryError::InvalidRecord(format!("{} cannot be stored as a REAL", amount))
    })
}
