//! Stateless numeric helpers used by presentation and accounting layers.
//!
//! Amounts are `Decimal`, never floats. All functions are safe to call from
//! any thread.

pub mod format;
pub mod id;
pub mod parse;
pub mod variance;

#[cfg(test)]
mod props;

use rust_decimal::Decimal;

pub use format::{CURRENCY_DECIMALS, format_currency};
pub use id::{ID_SUFFIX_LEN, generate_id};
pub use parse::{parse_number, parse_number_opt};
pub use variance::{BALANCE_TOLERANCE, VarianceResult, calculate_variance};

/// A monetary value. May be fractional, zero or negative.
pub type Amount = Decimal;
