//! Progressive bracket evaluation.
//!
//! A progressive tax applies increasing rates to successive slices of
//! income rather than one rate to the whole: the first slice (up to the
//! first threshold) is taxed at the first rate, the next slice at the
//! next rate, and so on. The open top bracket taxes any remainder above
//! the last finite threshold.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::progressive_tax;
//! use takehome_core::models::{BracketTable, TaxBracket};
//!
//! let table = BracketTable::new(vec![
//!     TaxBracket::new(dec!(9700), dec!(0.10)),
//!     TaxBracket::new(dec!(39475), dec!(0.12)),
//!     TaxBracket::unbounded(dec!(0.22)),
//! ])
//! .unwrap();
//!
//! // 9700 × 0.10 + (39475 − 9700) × 0.12 + (50000 − 39475) × 0.22
//! assert_eq!(progressive_tax(dec!(50000), &table), dec!(6858.50));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::BracketTable;

/// Computes the progressive tax owed on `taxable_income`.
///
/// Walks the table in threshold order, accumulating `rate × slice width`
/// for each bracket the income reaches; the bracket containing the
/// income contributes a partial slice. The accumulated total is rounded
/// to cent precision once at the end — never per bracket, which would
/// compound rounding error.
///
/// Non-positive income yields zero: there is no negative tax. Pure and
/// total — no side effects, always terminates for a validated table.
pub fn progressive_tax(
    taxable_income: Decimal,
    brackets: &BracketTable,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;
    for bracket in brackets.iter() {
        match bracket.upper_bound {
            // Income extends past this bracket: tax the full slice.
            Some(upper) if taxable_income > upper => {
                tax += (upper - lower) * bracket.rate;
                lower = upper;
            }
            // Final bracket reached, finite or open-topped.
            _ => {
                tax += (taxable_income - lower) * bracket.rate;
                break;
            }
        }
    }

    round_half_up(tax)
}
