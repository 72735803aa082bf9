//! Decimal parsing and fixed-point scaling
//!
//! All amounts are handled as `rust_decimal::Decimal` so that scaling a
//! display amount by `10^precision` is exact. Converting through binary
//! floating point would let a quantity such as `0.29` at precision 2 land on
//! 28 atomic units instead of 29.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest supported asset precision (`10^18` still fits in a `u64`)
pub const MAX_PRECISION: u32 = 18;

/// Parse user-entered text as a decimal number
///
/// Accepts an optional sign, digits with an optional `.` fraction, and
/// scientific notation (`1e-3`, `2.5E2`). Whitespace, digit separators,
/// `inf`/`nan` and values too large for the decimal range are rejected.
/// Values too small for 28 decimal places are rounded, as long fractions are.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let valid_chars = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !valid_chars || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => ("-", &text[1..]),
        b'+' => ("", &text[1..]),
        _ => ("", text),
    };

    // ".5" is a valid number for the user, add the leading zero the parser expects
    let normalized = if unsigned.starts_with('.') {
        format!("{}0{}", sign, unsigned)
    } else {
        format!("{}{}", sign, unsigned)
    };

    if normalized.contains(['e', 'E']) {
        parse_scientific(&normalized.to_ascii_lowercase())
    } else {
        Decimal::from_str(&normalized).ok()
    }
}

fn parse_scientific(text: &str) -> Option<Decimal> {
    if let Ok(value) = Decimal::from_scientific(text) {
        return Some(value);
    }

    // A negative exponent past the maximum scale: shift the mantissa down in
    // steps, each division rounding to 28 places
    let (mantissa, exponent) = text.split_once('e')?;
    let mut remaining: u64 = exponent.strip_prefix('-')?.parse().ok()?;
    let mut value = Decimal::from_str(mantissa).ok()?;

    while remaining > 0 && !value.is_zero() {
        let step = remaining.min(u64::from(MAX_PRECISION)) as u32;
        value = value.checked_div(Decimal::from(10u64.pow(step)))?;
        remaining -= u64::from(step);
    }
    Some(value)
}

/// `10^precision` as a decimal, or `None` if the precision is out of range
pub fn scale_factor(precision: u32) -> Option<Decimal> {
    if precision > MAX_PRECISION {
        return None;
    }
    10u64.checked_pow(precision).map(Decimal::from)
}

/// Scale a display amount to atomic units, rounding down
///
/// Returns `None` on overflow.
pub fn to_atomic(amount: Decimal, precision: u32) -> Option<Decimal> {
    let factor = scale_factor(precision)?;
    amount.checked_mul(factor).map(|scaled| scaled.floor())
}

/// Atomic amount of asset2 exchanged for `asset1_amount` at `price`
///
/// `price` is quoted in asset2 display units per asset1 display unit, so the
/// atomic ratio is `price * 10^precision2 / 10^precision1`. The product is
/// formed before dividing so the ratio itself is never rounded.
pub fn counter_amount(
    asset1_amount: u64,
    price: Decimal,
    precision1: u32,
    precision2: u32,
) -> Option<Decimal> {
    let numerator_scale = scale_factor(precision2)?;
    let denominator_scale = scale_factor(precision1)?;

    Decimal::from(asset1_amount)
        .checked_mul(price)?
        .checked_mul(numerator_scale)?
        .checked_div(denominator_scale)
        .map(|amount| amount.floor())
}

/// Convert an integral, non-negative decimal into a `u64` atomic amount
pub fn to_units(amount: Decimal) -> Option<u64> {
    if amount.is_sign_negative() || !amount.fract().is_zero() {
        return None;
    }
    amount.to_u64()
}
