//! Argument handling for the `tally` binary.

use tally_core::{Amount, calculate_variance, format_currency, generate_id, parse_number};
use tally_shared::{AppError, AppResult, DisplayConfig};

/// Usage text printed on argument errors.
pub const USAGE: &str = "\
usage:
  tally format <amount> [--show-zero]
  tally parse <text>
  tally id [count]
  tally variance <prepaid> <balance-sheet>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Format an amount for display.
    Format {
        /// Amount after lenient parsing.
        amount: Amount,
        /// `Some(true)` when `--show-zero` was given.
        show_zero: Option<bool>,
    },
    /// Leniently parse text into a number.
    Parse {
        /// Raw input text.
        text: String,
    },
    /// Generate identifiers.
    Id {
        /// How many ids to print.
        count: usize,
    },
    /// Compare a prepaid balance against the balance sheet.
    Variance {
        /// Prepaid balance.
        prepaid: Amount,
        /// Balance sheet amount.
        balance_sheet: Amount,
    },
}

impl Command {
    /// Parses arguments, excluding the program name.
    ///
    /// Amount arguments go through lenient parsing, so they never fail on
    /// their own. Missing arguments and unknown commands are usage errors.
    pub fn from_args<I, S>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| AppError::Usage("missing command".to_string()))?;

        match name.as_str() {
            "format" => {
                let show_zero = rest.iter().any(|a| a == "--show-zero");
                let amount = rest
                    .iter()
                    .find(|a| a.as_str() != "--show-zero")
                    .ok_or_else(|| missing("amount"))?;
                Ok(Self::Format {
                    amount: parse_number(amount),
                    show_zero: show_zero.then_some(true),
                })
            }
            "parse" => {
                let text = rest.first().ok_or_else(|| missing("text"))?;
                Ok(Self::Parse { text: text.clone() })
            }
            "id" => {
                let count = match rest.first() {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| AppError::Usage(format!("invalid count: {raw}")))?,
                    None => 1,
                };
                Ok(Self::Id { count })
            }
            "variance" => {
                let prepaid = rest.first().ok_or_else(|| missing("prepaid"))?;
                let balance_sheet = rest.get(1).ok_or_else(|| missing("balance-sheet"))?;
                Ok(Self::Variance {
                    prepaid: parse_number(prepaid),
                    balance_sheet: parse_number(balance_sheet),
                })
            }
            other => Err(AppError::Usage(format!("unknown command: {other}"))),
        }
    }

    /// Runs the command and returns the lines to print.
    pub fn run(&self, display: &DisplayConfig) -> AppResult<Vec<String>> {
        let lines = match self {
            Self::Format { amount, show_zero } => {
                let show_zero = show_zero.unwrap_or(display.show_zero);
                vec![format_currency(*amount, show_zero)]
            }
            Self::Parse { text } => vec![parse_number(text).normalize().to_string()],
            Self::Id { count } => (0..*count).map(|_| generate_id()).collect(),
            Self::Variance {
                prepaid,
                balance_sheet,
            } => {
                let result = calculate_variance(*prepaid, *balance_sheet);
                tracing::debug!(%result, "variance calculated");
                vec![serde_json::to_string(&result)?]
            }
        };
        Ok(lines)
    }
}

fn missing(what: &str) -> AppError {
    AppError::Usage(format!("missing {what}"))
}
