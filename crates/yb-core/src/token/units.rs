//! Conversion between integer base units and decimal strings.

use alloy_primitives::U256;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a decimal number: {0}")]
    InvalidNumber(String),

    #[error("amount has more than {decimals} fractional digits")]
    TooPrecise { decimals: u8 },

    #[error("amount does not fit in 256 bits")]
    Overflow,
}

fn scale(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Render `value` base units as a decimal string with `decimals` places.
///
/// Trailing fractional zeros are dropped, and the decimal point with them:
/// `1500000` at 6 decimals renders as `"1.5"`, `2000000` as `"2"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let base = scale(decimals);
    let integer = value / base;
    let fraction = value % base;
    if fraction.is_zero() {
        return integer.to_string();
    }

    let padded = format!(
        "{:0>width$}",
        fraction.to_string(),
        width = decimals as usize
    );
    let trimmed = padded.trim_end_matches('0');
    format!("{integer}.{trimmed}")
}

/// Parse a decimal string such as `"10.25"` into base units.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return Err(UnitsError::InvalidNumber(amount.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooPrecise { decimals });
    }

    let integer = if integer.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(integer, 10).map_err(|_| UnitsError::Overflow)?
    };
    let fraction = if fraction.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        U256::from_str_radix(&padded, 10).map_err(|_| UnitsError::Overflow)?
    };

    integer
        .checked_mul(scale(decimals))
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or(UnitsError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_six_decimal_amounts() {
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_units(U256::from(2_000_000u64), 6), "2");
        assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_units(U256::ZERO, 6), "0");
        assert_eq!(format_units(U256::from(123_456_789u64), 6), "123.456789");
    }

    #[test]
    fn formats_zero_decimal_tokens_verbatim() {
        assert_eq!(format_units(U256::from(42u64), 0), "42");
    }

    #[test]
    fn formats_eighteen_decimal_amounts() {
        let wei = U256::from(1_250_000_000_000_000_000u128);
        assert_eq!(format_units(wei, 18), "1.25");
    }

    #[test]
    fn formats_at_the_largest_supported_exponent() {
        let one = U256::from(10u64).pow(U256::from(crate::token::MAX_DECIMALS));
        assert_eq!(format_units(one, crate::token::MAX_DECIMALS), "1");
    }

    #[test]
    fn parses_decimal_amounts() {
        assert_eq!(parse_units("10", 6).unwrap(), U256::from(10_000_000u64));
        assert_eq!(parse_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(parse_units(".25", 6).unwrap(), U256::from(250_000u64));
        assert_eq!(parse_units("0.000001", 6).unwrap(), U256::from(1u64));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(parse_units("", 6), Err(UnitsError::Empty));
        assert_eq!(parse_units("   ", 6), Err(UnitsError::Empty));
        assert!(matches!(
            parse_units("abc", 6),
            Err(UnitsError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_units("1.2.3", 6),
            Err(UnitsError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_units("-1", 6),
            Err(UnitsError::InvalidNumber(_))
        ));
        assert!(matches!(parse_units(".", 6), Err(UnitsError::InvalidNumber(_))));
        assert_eq!(
            parse_units("0.0000001", 6),
            Err(UnitsError::TooPrecise { decimals: 6 })
        );
    }
}
