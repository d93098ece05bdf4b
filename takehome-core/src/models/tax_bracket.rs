use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One marginal tax bracket: income up to `upper_bound` (exclusive of the
/// next bracket) is taxed at `rate`.
///
/// `upper_bound: None` marks the open top bracket — it taxes everything
/// above the last finite threshold and must appear exactly once, last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// The open top bracket.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Errors detected when validating a bracket table's shape.
///
/// A malformed table is fatal configuration: it is reported before any
/// tax is computed, never guessed around.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table contains no brackets at all.
    #[error("bracket table is empty")]
    Empty,

    /// The last bracket has a finite upper bound, leaving high incomes
    /// with no applicable rate.
    #[error("bracket table has no unbounded top bracket")]
    MissingUnboundedBracket,

    /// An unbounded bracket appears before the end of the table.
    #[error("unbounded bracket at position {0} is not last")]
    UnboundedBracketNotLast(usize),

    /// Upper bounds must be positive and strictly increasing.
    #[error("bracket thresholds not strictly increasing: {prev} then {next}")]
    ThresholdsNotIncreasing { prev: Decimal, next: Decimal },

    /// A rate outside [0, 1].
    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),
}

/// An ordered sequence of marginal brackets ending in the open top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable(pub(crate) Vec<TaxBracket>);

impl BracketTable {
    /// Builds a table, rejecting malformed input up front.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the table is empty, lacks an open
    /// top bracket, has an unbounded bracket anywhere but last, has
    /// non-increasing or non-positive thresholds, or has a rate outside
    /// [0, 1].
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        let table = Self(brackets);
        table.validate()?;
        Ok(table)
    }

    /// Re-checks the table invariants.
    ///
    /// Deserialized tables bypass [`BracketTable::new`], so schedule
    /// loading calls this before the table is ever evaluated.
    pub fn validate(&self) -> Result<(), BracketTableError> {
        if self.0.is_empty() {
            return Err(BracketTableError::Empty);
        }

        let last = self.0.len() - 1;
        let mut prev_bound = Decimal::ZERO;
        for (index, bracket) in self.0.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::InvalidRate(bracket.rate));
            }
            match bracket.upper_bound {
                Some(bound) => {
                    if index == last {
                        return Err(BracketTableError::MissingUnboundedBracket);
                    }
                    if bound <= prev_bound {
                        return Err(BracketTableError::ThresholdsNotIncreasing {
                            prev: prev_bound,
                            next: bound,
                        });
                    }
                    prev_bound = bound;
                }
                None => {
                    if index != last {
                        return Err(BracketTableError::UnboundedBracketNotLast(index));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxBracket> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
