use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingType;

/// One filer's inputs for a single tax year.
///
/// All monetary fields are annual amounts and must be non-negative; the
/// deduction fields default to zero. The profile is a one-shot immutable
/// input — nothing in the calculation pipeline mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingProfile {
    /// Total gross income for the year.
    pub gross_income: Decimal,

    /// Employee or contractor; decides the payroll share multiplier and
    /// the employer-equivalent deductions.
    pub filing_type: FilingType,

    /// Pre-tax retirement (401k) contribution for the year.
    pub retirement_contribution: Decimal,

    /// Mortgage interest paid during the year (itemizable).
    pub mortgage_interest: Decimal,

    /// Property tax paid during the year (itemizable, subject to the
    /// local-tax deduction limit).
    pub property_tax: Decimal,
}

impl FilingProfile {
    /// Creates a profile with only income and filing type set; the
    /// deduction fields start at zero.
    pub fn new(
        gross_income: Decimal,
        filing_type: FilingType,
    ) -> Self {
        Self {
            gross_income,
            filing_type,
            retirement_contribution: Decimal::ZERO,
            mortgage_interest: Decimal::ZERO,
            property_tax: Decimal::ZERO,
        }
    }
}
