//! Decimal helpers shared by every numeric text field of the ladder
//!
//! User-editable numbers are kept as raw text and only parsed at commit
//! boundaries, so parsing, rounding and re-formatting live together here.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round to `dp` fractional digits, ties away from zero
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Shortest textual form of a decimal: `102.00` -> `"102"`, `80.50` -> `"80.5"`
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Fixed-point text with exactly `dp` fractional digits: `40` -> `"40.00"`
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = round_half_up(value, dp);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Parse user text into a decimal.
///
/// Surrounding whitespace is ignored and scientific notation is accepted.
/// Returns `None` for empty or non-numeric text.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parse the longest numeric prefix of user text: `"4x"` -> `4`, `".5%"` -> `0.5`.
///
/// Returns `None` when the text does not start with a number.
pub fn parse_leading_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }
    let has_digits = int_end > end || mantissa_end > int_end + 1;
    if !has_digits {
        return None;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    let prefix = text[..end].trim_end_matches('.');
    // ".5" and "-.5" need a leading zero
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if prefix[sign_len..].starts_with('.') {
        let padded = format!("{}0{}", &prefix[..sign_len], &prefix[sign_len..]);
        return parse_decimal(&padded);
    }
    parse_decimal(prefix)
}

/// Parse user text, treating anything non-numeric as zero
pub fn parse_or_zero(text: &str) -> Decimal {
    parse_decimal(text).unwrap_or(Decimal::ZERO)
}
