//! Balance variance between a prepaid balance and the balance sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Absolute tolerance under which a variance counts as balanced (0.01).
///
/// Downstream reports rely on this exact cutoff.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Prepaid balance vs balance sheet comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceResult {
    /// Prepaid balance minus balance sheet amount.
    pub variance: Decimal,
    /// True when `|variance| < BALANCE_TOLERANCE`.
    pub is_balanced: bool,
    /// Variance as a percentage of the balance sheet amount, zero when that
    /// amount is zero.
    pub percentage: Decimal,
}

impl std::fmt::Display for VarianceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "variance={} balanced={} percentage={}",
            self.variance, self.is_balanced, self.percentage
        )
    }
}

/// Compares a prepaid balance against the balance sheet amount.
///
/// The percentage is not rounded. A zero balance sheet amount yields a zero
/// percentage rather than a division error. Results beyond the range of
/// `Decimal` saturate to `Decimal::MAX` or `Decimal::MIN` with the sign of
/// the true result.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::calculate_variance;
///
/// let result = calculate_variance(dec!(101), dec!(100));
/// assert_eq!(result.variance, dec!(1));
/// assert!(!result.is_balanced);
/// assert_eq!(result.percentage, dec!(1));
/// ```
#[must_use]
pub fn calculate_variance(prepaid_balance: Amount, balance_sheet_amount: Amount) -> VarianceResult {
    let variance = prepaid_balance.saturating_sub(balance_sheet_amount);

    let percentage = if balance_sheet_amount.is_zero() {
        Decimal::ZERO
    } else {
        match variance.checked_div(balance_sheet_amount) {
            Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
            None if variance.is_sign_negative() == balance_sheet_amount.is_sign_negative() => {
                Decimal::MAX
            }
            None => Decimal::MIN,
        }
    };

    VarianceResult {
        variance,
        is_balanced: variance.abs() < BALANCE_TOLERANCE,
        percentage,
    }
}
