//! Currency display formatting.
//!
//! Output is a plain grouped number with two decimal places. No currency
//! symbol is added and the grouping separator is always `,`.

use rust_decimal::RoundingStrategy;

use super::Amount;

/// Number of decimal places shown for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

/// Formats an amount for display.
///
/// Returns an empty string when `amount` is exactly zero and `show_zero` is
/// false. Otherwise the amount is rounded half away from zero to two decimal
/// places and the integer part is grouped in thousands.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.5), false), "1,234.50");
/// assert_eq!(format_currency(dec!(0), false), "");
/// assert_eq!(format_currency(dec!(0), true), "0.00");
/// ```
#[must_use]
pub fn format_currency(amount: Amount, show_zero: bool) -> String {
    if amount.is_zero() && !show_zero {
        return String::new();
    }

    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMALS);

    // Values that round to zero print unsigned
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push('.');
    out.push_str(fraction);
    // `rescale` cannot add digits once the mantissa is full
    for _ in fraction.len()..CURRENCY_DECIMALS as usize {
        out.push('0');
    }
    out
}

/// Inserts the group separator every three digits, counting from the right.
fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / GROUP_SIZE);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
