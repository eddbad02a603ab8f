//! Lenient numeric-string parsing.
//!
//! Parsing never fails. Currency symbols, grouping commas and whitespace are
//! dropped, then the longest leading decimal number is read. Anything that
//! does not start with a number becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::Amount;

/// Parses user-entered text into an amount, falling back to zero.
///
/// `$`, `,` and every whitespace character are removed first. The remaining
/// text is read up to the first character that cannot continue a number, so
/// `"12abc"` yields `12` and `"1.2.3"` yields `1.2`. An optional exponent
/// (`1e3`) is honored. Empty, blank and unparseable input yields `0`, as do
/// values outside the range of `Decimal`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::parse_number;
///
/// assert_eq!(parse_number("$1,234.56"), dec!(1234.56));
/// assert_eq!(parse_number("abc"), dec!(0));
/// ```
#[must_use]
pub fn parse_number(value: &str) -> Amount {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    NumberPrefix::scan(&cleaned)
        .and_then(|prefix| prefix.to_decimal())
        .unwrap_or(Decimal::ZERO)
}

/// Same as [`parse_number`], treating an absent value as empty.
#[must_use]
pub fn parse_number_opt(value: Option<&str>) -> Amount {
    value.map_or(Decimal::ZERO, parse_number)
}

/// The pieces of the longest numeric prefix of a string.
#[derive(Debug, PartialEq, Eq)]
struct NumberPrefix<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: Option<&'a str>,
}

impl<'a> NumberPrefix<'a> {
    /// Scans `input` for `[+-]digits[.digits][(e|E)[+-]digits]`.
    ///
    /// Returns `None` when the mantissa has no digits at all.
    fn scan(input: &'a str) -> Option<Self> {
        let bytes = input.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let integer_start = pos;
        pos += count_digits(&bytes[pos..]);
        let integer = &input[integer_start..pos];

        let mut fraction = "";
        if bytes.get(pos) == Some(&b'.') {
            let fraction_start = pos + 1;
            let len = count_digits(&bytes[fraction_start..]);
            fraction = &input[fraction_start..fraction_start + len];
            pos = fraction_start + len;
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        // A dangling `e` or `e-` is not part of the number
        let mut exponent = None;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp_pos = pos + 1;
            if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
                exp_pos += 1;
            }
            let len = count_digits(&bytes[exp_pos..]);
            if len > 0 {
                exponent = Some(&input[pos + 1..exp_pos + len]);
            }
        }

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    fn to_decimal(&self) -> Option<Decimal> {
        let mut mantissa = String::with_capacity(self.integer.len() + self.fraction.len() + 3);
        if self.negative {
            mantissa.push('-');
        }
        if self.integer.is_empty() {
            mantissa.push('0');
        } else {
            mantissa.push_str(self.integer);
        }
        if !self.fraction.is_empty() {
            mantissa.push('.');
            mantissa.push_str(self.fraction);
        }

        let parsed = match self.exponent {
            Some(exponent) => Decimal::from_scientific(&format!("{mantissa}e{exponent}")),
            None => Decimal::from_str(&mantissa),
        };
        parsed.ok()
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
