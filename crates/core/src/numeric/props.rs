//! Property-based tests for numeric helpers.
//!
//! - Formatting round-trips through lenient parsing at two decimals
//! - Parsing never panics and ignores grouping noise
//! - Variance balance follows the fixed tolerance
//! - Neither formatting nor variance panics anywhere in `Decimal`'s range

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{
    BALANCE_TOLERANCE, CURRENCY_DECIMALS, calculate_variance, format_currency, parse_number,
};

/// Strategy to generate amounts with cents (-10,000,000.00 to 10,000,000.00).
fn cents_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with up to 4 decimal places.
fn fine_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Exclusive bound of a `Decimal` mantissa (2^96).
const MANTISSA_LIMIT: i128 = 1 << 96;

/// Strategy to generate any representable decimal, including range limits
/// and the smallest non-zero magnitudes.
fn full_range_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::MIN),
        Just(Decimal::new(1, 28)),
        Just(Decimal::new(-1, 28)),
        (any::<i128>(), 0u32..=28).prop_map(|(mantissa, scale)| {
            Decimal::from_i128_with_scale(mantissa % MANTISSA_LIMIT, scale)
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any non-zero amount formats with exactly two decimals and a grouped
    /// integer part.
    #[test]
    fn prop_format_full_range(amount in full_range_amount()) {
        prop_assume!(!amount.is_zero());
        let formatted = format_currency(amount, false);
        let unsigned = formatted.strip_prefix('-').unwrap_or(formatted.as_str());
        let (integer, fraction) = unsigned.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(integer.split(',').all(|group| !group.is_empty() && group.len() <= 3));
    }

    /// Variance never panics and stays exact whenever the difference fits.
    #[test]
    fn prop_variance_full_range(
        prepaid in full_range_amount(),
        balance_sheet in full_range_amount(),
    ) {
        let result = calculate_variance(prepaid, balance_sheet);
        if let Some(exact) = prepaid.checked_sub(balance_sheet) {
            prop_assert_eq!(result.variance, exact);
        }
        prop_assert_eq!(result.is_balanced, result.variance.abs() < BALANCE_TOLERANCE);
        if balance_sheet.is_zero() {
            prop_assert_eq!(result.percentage, Decimal::ZERO);
        }
    }

    /// Formatting then parsing gives back the amount rounded to cents.
    #[test]
    fn prop_format_then_parse(amount in fine_amount()) {
        let formatted = format_currency(amount, true);
        let expected = amount
            .round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(parse_number(&formatted), expected);
    }

    /// Formatted output always has exactly two decimal digits.
    #[test]
    fn prop_format_has_two_decimals(amount in cents_amount()) {
        prop_assume!(!amount.is_zero());
        let formatted = format_currency(amount, false);
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    /// Parsing arbitrary text never panics.
    #[test]
    fn prop_parse_never_panics(text in ".*") {
        let _ = parse_number(&text);
    }

    /// Dollar signs, commas and spaces never change the parsed value.
    #[test]
    fn prop_parse_ignores_noise(amount in cents_amount(), noise in "[$, ]{0,4}") {
        let plain = amount.to_string();
        let noisy = format!("{noise}{plain}{noise}");
        prop_assert_eq!(parse_number(&noisy), amount);
    }

    /// Balanced exactly when the absolute difference is under 0.01.
    #[test]
    fn prop_balanced_matches_tolerance(
        prepaid in fine_amount(),
        balance_sheet in fine_amount(),
    ) {
        let result = calculate_variance(prepaid, balance_sheet);
        prop_assert_eq!(result.variance, prepaid - balance_sheet);
        prop_assert_eq!(result.is_balanced, (prepaid - balance_sheet).abs() < BALANCE_TOLERANCE);
    }

    /// Percentage times the reference gives back the variance.
    #[test]
    fn prop_percentage_scales_variance(
        prepaid in cents_amount(),
        balance_sheet in cents_amount(),
    ) {
        prop_assume!(!balance_sheet.is_zero());
        let result = calculate_variance(prepaid, balance_sheet);
        let rebuilt = result.percentage * balance_sheet / Decimal::ONE_HUNDRED;
        prop_assert!((rebuilt - result.variance).abs() < Decimal::new(1, 6));
    }
}
