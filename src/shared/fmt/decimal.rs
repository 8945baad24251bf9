//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values with subscript notation for very small
//! prices (common for freshly launched tokens), fixed-precision previews, signed
//! percentages and the `$X.XM` notation of the pair list.

use super::num::group_thousands;
use rust_decimal::prelude::*;

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Round half away from zero, the way the UI has always rounded.
fn round(value: &Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

enum PriceFormat {
    Standard(u32),
    Subscript { zeros: u32, significant: String },
}

fn count_digits(n: u128) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

fn price_format(value: &Decimal) -> PriceFormat {
    let abs_value = value.abs();

    if abs_value.is_zero() || abs_value >= Decimal::ONE {
        return PriceFormat::Standard(if abs_value >= Decimal::ONE_HUNDRED { 0 } else { 2 });
    }

    let mantissa = abs_value.mantissa().unsigned_abs();
    let digits = count_digits(mantissa);
    let leading_zeros = abs_value.scale().saturating_sub(digits);

    if leading_zeros <= 5 {
        return PriceFormat::Standard((leading_zeros + 3).min(8));
    }

    let keep = digits.min(4);
    let mut significant = mantissa / 10u128.pow(digits - keep);
    while significant > 0 && significant % 10 == 0 {
        significant /= 10;
    }

    PriceFormat::Subscript {
        zeros: leading_zeros,
        significant: significant.to_string(),
    }
}

/// Format a price with precision chosen from its magnitude.
///
/// Prices with more than five zeros after the decimal point are written as
/// `0.0(n)digits`, where `n` is the number of zeros.
pub fn price(value: &Decimal) -> String {
    match price_format(value) {
        PriceFormat::Standard(dp) => group_thousands(&round(value, dp).to_string()),
        PriceFormat::Subscript { zeros, significant } => {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            format!("{sign}0.0({zeros}){significant}")
        }
    }
}

/// Fixed number of decimal places, zero-padded (`fixed(2.5, 2)` is `"2.50"`).
pub fn fixed(value: &Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round(value, dp))
}

/// Signed percentage with two decimals: `+1.23%`, `-0.50%`, `0.00%`.
pub fn signed_percent(value: &Decimal) -> String {
    let sign = if value.is_sign_positive() && !value.is_zero() {
        "+"
    } else {
        ""
    };
    format!("{sign}{}%", fixed(value, 2))
}

/// Dollar amount in millions with one decimal (`$1.5M`); `N/A` when absent or zero.
pub fn usd_millions(value: Option<&Decimal>) -> String {
    match value {
        Some(v) if !v.is_zero() => format!("${}M", fixed(&(v / MILLION), 1)),
        _ => "N/A".to_string(),
    }
}

/// Whole-dollar amount with thousands separators (`$1,234,568`).
pub fn usd_whole(value: &Decimal) -> String {
    format!("${}", group_thousands(&round(value, 0).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_zero() {
        assert_eq!(price(&Decimal::ZERO), "0");
    }

    #[test]
    fn test_price_large_values_no_decimals() {
        assert_eq!(price(&dec("100")), "100");
        assert_eq!(price(&dec("1234.56")), "1,235");
    }

    #[test]
    fn test_price_medium_values_two_decimals() {
        assert_eq!(price(&dec("1.50")), "1.5");
        assert_eq!(price(&dec("15.456")), "15.46");
    }

    #[test]
    fn test_price_small_values_standard() {
        assert_eq!(price(&dec("0.0234")), "0.0234");
        assert_eq!(price(&dec("0.000123")), "0.000123");
    }

    #[test]
    fn test_price_tiny_values_subscript() {
        assert_eq!(price(&dec("0.0000001")), "0.0(6)1");
        assert_eq!(price(&dec("0.00000012345")), "0.0(6)1234");
        assert_eq!(price(&dec("-0.00000015")), "-0.0(6)15");
    }

    #[test]
    fn test_fixed_pads_and_rounds() {
        assert_eq!(fixed(&dec("2.5"), 2), "2.50");
        assert_eq!(fixed(&dec("1.235"), 2), "1.24");
        assert_eq!(fixed(&dec("1.44425"), 4), "1.4443");
        assert_eq!(fixed(&Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(&dec("1.234")), "+1.23%");
        assert_eq!(signed_percent(&dec("-0.5")), "-0.50%");
        assert_eq!(signed_percent(&Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_usd_millions() {
        assert_eq!(usd_millions(Some(&dec("1500000"))), "$1.5M");
        assert_eq!(usd_millions(Some(&dec("123456789"))), "$123.5M");
        assert_eq!(usd_millions(Some(&dec("40000"))), "$0.0M");
        assert_eq!(usd_millions(Some(&Decimal::ZERO)), "N/A");
        assert_eq!(usd_millions(None), "N/A");
    }

    #[test]
    fn test_usd_whole() {
        assert_eq!(usd_whole(&dec("1234567.8")), "$1,234,568");
        assert_eq!(usd_whole(&Decimal::ZERO), "$0");
    }
}
