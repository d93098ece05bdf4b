//! Full liability composition: payroll, state, and federal taxes plus
//! take-home income.
//!
//! # Category structure
//!
//! | Category          | Base                                        | Filing-type rule          |
//! |-------------------|---------------------------------------------|---------------------------|
//! | Social security   | gross income up to the wage cap             | contractor rate doubled   |
//! | Medicare          | all gross income (+ optional surtax slice)  | contractor rate doubled   |
//! | State disability  | gross income up to the disability cap       | never doubled             |
//! | State income      | gross − standard deduction − retirement     | employer halves deducted  |
//! | Federal income    | gross − max(itemized, standard) − retirement| SS employer half deducted |
//!
//! The categories are derived in a fixed order — payroll first, then
//! state, then federal — because the contractor deductions feed the
//! income-tax bases and the state tax feeds the federal itemized
//! deduction. Every derivation is a pure function of the profile, the
//! schedule, and earlier results; nothing is mutated.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::LiabilityWorksheet;
//! use takehome_core::models::{FilingProfile, FilingType, RateSchedule};
//!
//! let schedule = RateSchedule::tax_year_2020();
//! let profile = FilingProfile::new(dec!(100000), FilingType::Employee);
//!
//! let worksheet = LiabilityWorksheet::new(&schedule);
//! let result = worksheet.calculate(&profile).unwrap();
//!
//! assert_eq!(result.social_security_tax, dec!(6200.00));
//! assert_eq!(result.medicare_tax, dec!(1450.00));
//! assert_eq!(result.take_home_income, dec!(70057.16));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::brackets::progressive_tax;
use crate::calculations::common::{floor_at_zero, max, round_half_up};
use crate::models::{FilingProfile, FilingType, RateSchedule, ScheduleError};

/// Errors that can occur when composing a liability estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiabilityError {
    /// Gross income must be non-negative.
    #[error("gross income must be non-negative, got {0}")]
    NegativeGrossIncome(Decimal),

    /// The retirement contribution must be non-negative.
    #[error("retirement contribution must be non-negative, got {0}")]
    NegativeRetirementContribution(Decimal),

    /// Mortgage interest must be non-negative.
    #[error("mortgage interest must be non-negative, got {0}")]
    NegativeMortgageInterest(Decimal),

    /// Property tax must be non-negative.
    #[error("property tax must be non-negative, got {0}")]
    NegativePropertyTax(Decimal),

    /// The rate schedule failed validation.
    #[error("invalid rate schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Result of a full liability calculation.
///
/// Derived once, never mutated. Alongside the five category amounts it
/// carries the intermediate bases and the deduction decision for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Social security payroll tax.
    pub social_security_tax: Decimal,

    /// Medicare payroll tax, including any surtax slice.
    pub medicare_tax: Decimal,

    /// State disability/unemployment insurance tax.
    pub disability_tax: Decimal,

    /// State income tax from the state bracket table.
    pub state_income_tax: Decimal,

    /// Federal income tax from the federal bracket table.
    pub federal_income_tax: Decimal,

    /// Sum of the five categories.
    pub total_tax: Decimal,

    /// Gross income minus total tax minus the retirement contribution.
    /// The contribution is withheld pre-tax, so it is subtracted here
    /// and never counted inside any category.
    pub take_home_income: Decimal,

    /// State taxable base after deductions, floored at zero.
    pub state_taxable_income: Decimal,

    /// Federal taxable base after deductions, floored at zero.
    pub federal_taxable_income: Decimal,

    /// The federal deduction actually applied.
    pub federal_deduction: Decimal,

    /// Whether the itemized deduction beat the standard deduction.
    pub used_itemized_deduction: bool,
}

/// Calculator composing the five tax categories for one filing profile.
///
/// Borrows the rate schedule; the schedule is validated on every
/// [`calculate`](Self::calculate) call before any amount is derived.
#[derive(Debug, Clone)]
pub struct LiabilityWorksheet<'a> {
    schedule: &'a RateSchedule,
}

impl<'a> LiabilityWorksheet<'a> {
    pub fn new(schedule: &'a RateSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the full liability estimate for a profile.
    ///
    /// # Errors
    ///
    /// Returns [`LiabilityError`] if the schedule fails validation or
    /// any monetary input is negative. A zero gross income is not an
    /// error: every category computes to zero.
    pub fn calculate(
        &self,
        profile: &FilingProfile,
    ) -> Result<TaxResult, LiabilityError> {
        self.schedule.validate()?;
        validate_profile(profile)?;

        if profile.gross_income == Decimal::ZERO {
            warn!("gross income is zero; every tax category will be zero");
        }

        // Payroll taxes come first: the contractor deductions below need
        // their amounts.
        let social_security_tax = self.social_security_tax(profile);
        let medicare_tax = self.medicare_tax(profile);
        let disability_tax = self.disability_tax(profile);

        // State before federal: the state tax feeds the federal
        // itemized deduction.
        let state_taxable_income =
            self.state_taxable_income(profile, social_security_tax, medicare_tax);
        let state_income_tax =
            progressive_tax(state_taxable_income, &self.schedule.state_brackets);

        let (federal_deduction, used_itemized_deduction) =
            self.federal_deduction(profile, state_income_tax);
        let federal_taxable_income =
            self.federal_taxable_income(profile, federal_deduction, social_security_tax);
        let federal_income_tax =
            progressive_tax(federal_taxable_income, &self.schedule.federal_brackets);

        let total_tax = round_half_up(
            social_security_tax
                + medicare_tax
                + disability_tax
                + state_income_tax
                + federal_income_tax,
        );
        let take_home_income = round_half_up(
            profile.gross_income - total_tax - profile.retirement_contribution,
        );

        Ok(TaxResult {
            social_security_tax,
            medicare_tax,
            disability_tax,
            state_income_tax,
            federal_income_tax,
            total_tax,
            take_home_income,
            state_taxable_income,
            federal_taxable_income,
            federal_deduction,
            used_itemized_deduction,
        })
    }

    /// Social security tax: rate × income up to the wage cap.
    ///
    /// The rate is the filing-type lookup — double the employee baseline
    /// for contractors, who owe both shares. The cap itself does not
    /// move with filing type.
    fn social_security_tax(
        &self,
        profile: &FilingProfile,
    ) -> Decimal {
        let taxable = profile
            .gross_income
            .min(self.schedule.social_security_wage_cap);
        round_half_up(taxable * self.schedule.social_security_rate_for(profile.filing_type))
    }

    /// Medicare tax: rate × all gross income, uncapped.
    ///
    /// When the schedule defines a surtax, the slice of income above its
    /// threshold is taxed additionally at the surtax rate. The surtax
    /// rate is not doubled for contractors; only the baseline rate
    /// carries the payroll share multiplier.
    fn medicare_tax(
        &self,
        profile: &FilingProfile,
    ) -> Decimal {
        let mut tax =
            profile.gross_income * self.schedule.medicare_rate_for(profile.filing_type);

        if let Some(surtax) = &self.schedule.medicare_surtax {
            let excess = profile.gross_income - surtax.threshold;
            if excess > Decimal::ZERO {
                tax += excess * surtax.rate;
            }
        }

        round_half_up(tax)
    }

    /// State disability tax: rate × income up to the disability cap.
    ///
    /// Structurally the social security formula with its own rate and
    /// cap, but never doubled by filing type.
    fn disability_tax(
        &self,
        profile: &FilingProfile,
    ) -> Decimal {
        let taxable = profile.gross_income.min(self.schedule.disability_wage_cap);
        round_half_up(taxable * self.schedule.disability_rate)
    }

    /// State taxable base: gross − standard deduction − retirement,
    /// minus the employer halves of BOTH payroll taxes for contractors.
    ///
    /// Deductions can exceed income; the base floors at zero.
    fn state_taxable_income(
        &self,
        profile: &FilingProfile,
        social_security_tax: Decimal,
        medicare_tax: Decimal,
    ) -> Decimal {
        let mut base = profile.gross_income
            - self.schedule.state_standard_deduction
            - profile.retirement_contribution;

        if profile.filing_type == FilingType::Contractor {
            base -= employer_half(social_security_tax) + employer_half(medicare_tax);
        }

        if base < Decimal::ZERO {
            warn!(
                gross_income = %profile.gross_income,
                base = %base,
                "deductions exceed income; state taxable base floored at zero"
            );
        }

        floor_at_zero(round_half_up(base))
    }

    /// The federal deduction: the larger of the itemized deduction and
    /// the standard deduction, with a flag recording which won.
    ///
    /// Itemized = capped state-and-local taxes (state income tax plus
    /// property tax, up to the local limit) plus mortgage interest plus
    /// the flat donation allowance when the schedule defines one.
    fn federal_deduction(
        &self,
        profile: &FilingProfile,
        state_income_tax: Decimal,
    ) -> (Decimal, bool) {
        let local_taxes = (state_income_tax + profile.property_tax)
            .min(self.schedule.local_tax_deduction_limit);
        let itemized = round_half_up(
            local_taxes
                + profile.mortgage_interest
                + self.schedule.donation_allowance.unwrap_or(Decimal::ZERO),
        );

        let standard = self.schedule.federal_standard_deduction;
        (max(itemized, standard), itemized > standard)
    }

    /// Federal taxable base: gross − deduction − retirement, minus the
    /// employer half of social security ONLY for contractors.
    ///
    /// The medicare employer half is deductible against the state base
    /// but not the federal one. The asymmetry is the modeled policy,
    /// not an accident; do not "fix" it here.
    fn federal_taxable_income(
        &self,
        profile: &FilingProfile,
        federal_deduction: Decimal,
        social_security_tax: Decimal,
    ) -> Decimal {
        let mut base =
            profile.gross_income - federal_deduction - profile.retirement_contribution;

        if profile.filing_type == FilingType::Contractor {
            base -= employer_half(social_security_tax);
        }

        if base < Decimal::ZERO {
            warn!(
                gross_income = %profile.gross_income,
                base = %base,
                "deductions exceed income; federal taxable base floored at zero"
            );
        }

        floor_at_zero(round_half_up(base))
    }
}

/// Employer-equivalent share of an already-computed payroll tax.
fn employer_half(tax: Decimal) -> Decimal {
    round_half_up(tax / Decimal::TWO)
}

/// Rejects profiles with negative monetary inputs.
fn validate_profile(profile: &FilingProfile) -> Result<(), LiabilityError> {
    if profile.gross_income < Decimal::ZERO {
        return Err(LiabilityError::NegativeGrossIncome(profile.gross_income));
    }
    if profile.retirement_contribution < Decimal::ZERO {
        return Err(LiabilityError::NegativeRetirementContribution(
            profile.retirement_contribution,
        ));
    }
    if profile.mortgage_interest < Decimal::ZERO {
        return Err(LiabilityError::NegativeMortgageInterest(
            profile.mortgage_interest,
        ));
    }
    if profile.property_tax < Decimal::ZERO {
        return Err(LiabilityError::NegativePropertyTax(profile.property_tax));
    }
    Ok(())
}
