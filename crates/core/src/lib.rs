//! Core numeric helpers for Tally.
//!
//! This crate contains pure, stateless functions with ZERO I/O, logging or
//! configuration dependencies. Every operation always succeeds: invalid input
//! is replaced by a safe default instead of an error.
//!
//! # Modules
//!
//! - `numeric` - Currency formatting, lenient parsing, id generation and
//!   balance variance

pub mod numeric;

pub use numeric::{
    Amount, BALANCE_TOLERANCE, CURRENCY_DECIMALS, ID_SUFFIX_LEN, VarianceResult,
    calculate_variance, format_currency, generate_id, parse_number, parse_number_opt,
};
