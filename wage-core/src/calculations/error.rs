use rust_decimal::Decimal;
use thiserror::Error;

/// Inputs a calculator refuses to work with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Miles per gallon (or per kWh) must be above zero.
    #[error("vehicle efficiency must be greater than zero, got {0}")]
    NonPositiveEfficiency(Decimal),

    #[error("vehicle lifetime mileage must be greater than zero, got {0}")]
    NonPositiveLifetimeMileage(Decimal),

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("work from home days ({wfh_days}) cannot exceed work days per week ({work_days})")]
    WfhExceedsWorkDays {
        work_days: Decimal,
        wfh_days: Decimal,
    },

    /// An intermediate figure left the range a `Decimal` can hold.
    #[error("{field} is too large to calculate")]
    Overflow { field: &'static str },
}

/// Rejects a negative `value`, naming the offending `field`.
pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), CalculationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalculationError::Negative { field, value });
    }
    Ok(())
}

/// Unwraps the result of a `checked_*` operation, naming the figure that
/// overflowed.
pub(crate) fn checked(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, CalculationError> {
    value.ok_or(CalculationError::Overflow { field })
}
