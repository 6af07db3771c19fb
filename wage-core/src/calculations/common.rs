//! Arithmetic helpers shared by the wage, commute and comparison calculators.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::{CalculationError, checked};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(52.185)), dec!(52.19));
/// assert_eq!(round_half_up(dec!(52.184)), dec!(52.18));
/// assert_eq!(round_half_up(dec!(-3.205)), dec!(-3.21));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Divides `numerator` by `denominator`, yielding zero when the denominator
/// is zero.
///
/// Every wage in this crate is defined as zero when its hours are zero, so
/// callers never see a division fault. A quotient too large for a `Decimal`
/// is reported against `field`.
pub(crate) fn divide_or_zero(
    field: &'static str,
    numerator: Decimal,
    denominator: Decimal,
) -> Result<Decimal, CalculationError> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }
    checked(field, numerator.checked_div(denominator))
}

/// `change` as a percentage of `base`.
///
/// `None` when `base` is zero or the percentage does not fit a `Decimal`.
pub fn percent_of(
    change: Decimal,
    base: Decimal,
) -> Option<Decimal> {
    change
        .checked_div(base)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
