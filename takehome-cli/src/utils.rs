use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be used as a monetary amount.
#[derive(Debug, Error)]
pub enum ParseMoneyError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize_money_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a command-line monetary amount into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Negative
/// amounts are rejected here so bad input fails at the flag, before the
/// core sees it.
pub fn parse_money(s: &str) -> Result<Decimal, ParseMoneyError> {
    let normalized = normalize_money_input(s);
    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseMoneyError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if amount < Decimal::ZERO {
        return Err(ParseMoneyError::Negative {
            input: s.to_string(),
        });
    }
    Ok(amount)
}
