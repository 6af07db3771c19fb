use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid number '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// dollar sign and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles `$` and comma as thousands separator (e.g. `"$1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.trim().to_string(),
            source: e,
        }
    })
}

/// Parses a string into an optional [`Decimal`].
///
/// Empty or whitespace-only input is `None`; anything else must parse.
pub fn parse_optional_decimal(s: &str) -> Result<Option<Decimal>, ParseDecimalError> {
    if normalize_decimal_input(s).is_empty() {
        Ok(None)
    } else {
        parse_decimal(s).map(Some)
    }
}

/// Rounds half away from zero and always prints `dp` decimal places.
pub fn format_fixed(
    value: Decimal,
    dp: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", dp as usize, rounded.abs());
    if rounded < Decimal::ZERO {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Like [`format_fixed`], with a comma every three integer digits.
pub fn format_grouped(
    value: Decimal,
    dp: u32,
) -> String {
    let fixed = format_fixed(value, dp);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$1,234.56`, with the minus sign ahead of the dollar sign.
pub fn format_money(value: Decimal) -> String {
    let grouped = format_grouped(value, 2);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}

/// Money with an explicit sign: `+$3.00`, `-$1,250.00`.
pub fn format_signed_money(value: Decimal) -> String {
    let money = format_money(value);
    if money.starts_with('-') {
        money
    } else {
        format!("+{money}")
    }
}

/// Plain number with an explicit sign: `+1.5`, `-250`.
pub fn format_signed(
    value: Decimal,
    dp: u32,
) -> String {
    let fixed = format_fixed(value, dp);
    if fixed.starts_with('-') {
        fixed
    } else {
        format!("+{fixed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_dollar_sign_and_commas() {
        assert_eq!(parse_decimal("$120,000").unwrap(), dec!(120000));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_decimal("  $ 3.50 ").unwrap(), dec!(3.50));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        let err = parse_decimal(" twelve ").unwrap_err();
        assert!(err.to_string().starts_with("invalid number 'twelve': "));
    }

    #[test]
    fn parse_optional_decimal_blank_is_none_and_garbage_is_error() {
        assert_eq!(parse_optional_decimal("130,000").unwrap(), Some(dec!(130000)));
        assert_eq!(parse_optional_decimal("  ").unwrap(), None);
        assert!(parse_optional_decimal("abc").is_err());
    }

    #[test]
    fn format_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(dec!(52.185), 2), "52.19");
        assert_eq!(format_fixed(dec!(2253.3333), 1), "2253.3");
        assert_eq!(format_fixed(dec!(8), 1), "8.0");
        assert_eq!(format_fixed(dec!(-0.001), 2), "0.00");
        assert_eq!(format_fixed(dec!(249.5), 0), "250");
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(dec!(117608)), "$117,608.00");
        assert_eq!(format_money(dec!(999.999)), "$1,000.00");
        assert_eq!(format_money(dec!(-2392)), "-$2,392.00");
        assert_eq!(format_money(dec!(0)), "$0.00");
    }

    #[test]
    fn signed_formats_always_carry_a_sign() {
        assert_eq!(format_signed_money(dec!(3.2)), "+$3.20");
        assert_eq!(format_signed_money(dec!(-5.5)), "-$5.50");
        assert_eq!(format_signed_money(dec!(0)), "+$0.00");
        assert_eq!(format_signed(dec!(-9.53), 1), "-9.5");
        assert_eq!(format_signed(dec!(250), 0), "+250");
    }

    #[test]
    fn format_grouped_without_fraction() {
        assert_eq!(format_grouped(dec!(1234567), 0), "1,234,567");
        assert_eq!(format_grouped(dec!(123), 0), "123");
    }
}
