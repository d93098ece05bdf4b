use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BracketTable, BracketTableError, FilingType, TaxBracket};

/// Errors that make a rate schedule unusable.
///
/// Detected by [`RateSchedule::validate`] before any liability is
/// computed; a bad schedule is fatal configuration, never guessed around.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The social security rate must be between 0 and 1.
    #[error("social security rate must be between 0 and 1, got {0}")]
    InvalidSocialSecurityRate(Decimal),

    /// The social security wage cap must be positive.
    #[error("social security wage cap must be positive, got {0}")]
    InvalidSocialSecurityCap(Decimal),

    /// The medicare rate must be between 0 and 1.
    #[error("medicare rate must be between 0 and 1, got {0}")]
    InvalidMedicareRate(Decimal),

    /// The medicare surtax rate must be between 0 and 1.
    #[error("medicare surtax rate must be between 0 and 1, got {0}")]
    InvalidSurtaxRate(Decimal),

    /// The medicare surtax threshold must be positive.
    #[error("medicare surtax threshold must be positive, got {0}")]
    InvalidSurtaxThreshold(Decimal),

    /// The disability rate must be between 0 and 1.
    #[error("disability rate must be between 0 and 1, got {0}")]
    InvalidDisabilityRate(Decimal),

    /// The disability wage cap must be positive.
    #[error("disability wage cap must be positive, got {0}")]
    InvalidDisabilityCap(Decimal),

    /// Standard deductions and the local-tax limit must be non-negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeDeduction { name: &'static str, value: Decimal },

    /// The state bracket table is malformed.
    #[error("state bracket table: {0}")]
    StateBrackets(#[source] BracketTableError),

    /// The federal bracket table is malformed.
    #[error("federal bracket table: {0}")]
    FederalBrackets(#[source] BracketTableError),
}

/// Additional medicare tax on income above a threshold.
///
/// Policy varies by schedule edition, so it is an optional rule rather
/// than a hardcoded constant. The surtax rate applies to the slice of
/// gross income above `threshold` and is not doubled for contractors —
/// the payroll share multiplier covers the baseline rate only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareSurtax {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// All rates, caps, deduction limits, and bracket tables for one tax
/// year and jurisdiction.
///
/// A schedule is loaded (or selected from the built-in editions) once at
/// startup and read-only thereafter. Switching years means swapping the
/// whole bundle; nothing ever mutates a field in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// The tax year this edition models.
    pub tax_year: i32,

    /// Employee-baseline social security rate; contractors pay double.
    pub social_security_rate: Decimal,

    /// Wages above this cap owe no social security tax.
    pub social_security_wage_cap: Decimal,

    /// Employee-baseline medicare rate; contractors pay double. Applies
    /// to all gross income, uncapped.
    pub medicare_rate: Decimal,

    /// Optional additional medicare tax on high incomes.
    #[serde(default)]
    pub medicare_surtax: Option<MedicareSurtax>,

    /// State disability/unemployment insurance rate. Never doubled by
    /// filing type.
    pub disability_rate: Decimal,

    /// Wages above this cap owe no disability tax.
    pub disability_wage_cap: Decimal,

    /// Flat deduction from the state taxable base.
    pub state_standard_deduction: Decimal,

    /// Flat deduction from the federal taxable base, used when itemizing
    /// does not beat it.
    pub federal_standard_deduction: Decimal,

    /// Cap on the state-and-local-tax portion of the federal itemized
    /// deduction.
    pub local_tax_deduction_limit: Decimal,

    /// Flat charitable allowance added to the itemized deduction; only
    /// some editions define one.
    #[serde(default)]
    pub donation_allowance: Option<Decimal>,

    /// State income tax brackets.
    pub state_brackets: BracketTable,

    /// Federal income tax brackets.
    pub federal_brackets: BracketTable,
}

impl RateSchedule {
    /// Validates every rate, cap, limit, and bracket table.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if any rate is outside [0, 1], any cap
    /// is not positive, any deduction amount is negative, or either
    /// bracket table is malformed.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.social_security_rate < Decimal::ZERO || self.social_security_rate > Decimal::ONE {
            return Err(ScheduleError::InvalidSocialSecurityRate(
                self.social_security_rate,
            ));
        }
        if self.social_security_wage_cap <= Decimal::ZERO {
            return Err(ScheduleError::InvalidSocialSecurityCap(
                self.social_security_wage_cap,
            ));
        }
        if self.medicare_rate < Decimal::ZERO || self.medicare_rate > Decimal::ONE {
            return Err(ScheduleError::InvalidMedicareRate(self.medicare_rate));
        }
        if let Some(surtax) = &self.medicare_surtax {
            if surtax.rate < Decimal::ZERO || surtax.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidSurtaxRate(surtax.rate));
            }
            if surtax.threshold <= Decimal::ZERO {
                return Err(ScheduleError::InvalidSurtaxThreshold(surtax.threshold));
            }
        }
        if self.disability_rate < Decimal::ZERO || self.disability_rate > Decimal::ONE {
            return Err(ScheduleError::InvalidDisabilityRate(self.disability_rate));
        }
        if self.disability_wage_cap <= Decimal::ZERO {
            return Err(ScheduleError::InvalidDisabilityCap(self.disability_wage_cap));
        }

        let deductions = [
            ("state standard deduction", self.state_standard_deduction),
            ("federal standard deduction", self.federal_standard_deduction),
            ("local tax deduction limit", self.local_tax_deduction_limit),
            (
                "donation allowance",
                self.donation_allowance.unwrap_or(Decimal::ZERO),
            ),
        ];
        for (name, value) in deductions {
            if value < Decimal::ZERO {
                return Err(ScheduleError::NegativeDeduction { name, value });
            }
        }

        self.state_brackets
            .validate()
            .map_err(ScheduleError::StateBrackets)?;
        self.federal_brackets
            .validate()
            .map_err(ScheduleError::FederalBrackets)?;

        Ok(())
    }

    /// Social security rate for a filing type: the employee baseline
    /// times the payroll share multiplier.
    pub fn social_security_rate_for(
        &self,
        filing_type: FilingType,
    ) -> Decimal {
        self.social_security_rate * filing_type.payroll_share_multiplier()
    }

    /// Medicare baseline rate for a filing type. The surtax, when the
    /// edition defines one, is layered on top without doubling.
    pub fn medicare_rate_for(
        &self,
        filing_type: FilingType,
    ) -> Decimal {
        self.medicare_rate * filing_type.payroll_share_multiplier()
    }

    /// Looks up a built-in schedule edition by tax year.
    pub fn for_tax_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2019 => Some(Self::tax_year_2019()),
            2020 => Some(Self::tax_year_2020()),
            _ => None,
        }
    }

    /// The 2019 edition: earlier wage caps, no donation allowance, no
    /// medicare surtax.
    pub fn tax_year_2019() -> Self {
        Self {
            tax_year: 2019,
            social_security_rate: dec!(0.062),
            social_security_wage_cap: dec!(132900),
            medicare_rate: dec!(0.0145),
            medicare_surtax: None,
            disability_rate: dec!(0.01),
            disability_wage_cap: dec!(118371),
            state_standard_deduction: dec!(4537),
            federal_standard_deduction: dec!(12200),
            local_tax_deduction_limit: dec!(10000),
            donation_allowance: None,
            state_brackets: california_brackets(),
            federal_brackets: federal_single_brackets(),
        }
    }

    /// The 2020 edition: updated wage caps, a flat $250 donation
    /// allowance, and the 0.9% additional medicare tax above $200,000.
    pub fn tax_year_2020() -> Self {
        Self {
            tax_year: 2020,
            social_security_rate: dec!(0.062),
            social_security_wage_cap: dec!(137700),
            medicare_rate: dec!(0.0145),
            medicare_surtax: Some(MedicareSurtax {
                threshold: dec!(200000),
                rate: dec!(0.009),
            }),
            disability_rate: dec!(0.01),
            disability_wage_cap: dec!(122909),
            state_standard_deduction: dec!(4537),
            federal_standard_deduction: dec!(12200),
            local_tax_deduction_limit: dec!(10000),
            donation_allowance: Some(dec!(250)),
            state_brackets: california_brackets(),
            federal_brackets: federal_single_brackets(),
        }
    }
}

/// Federal single-filer brackets shared by both built-in editions.
fn federal_single_brackets() -> BracketTable {
    BracketTable::new(vec![
        TaxBracket::new(dec!(9700), dec!(0.10)),
        TaxBracket::new(dec!(39475), dec!(0.12)),
        TaxBracket::new(dec!(84200), dec!(0.22)),
        TaxBracket::new(dec!(160725), dec!(0.24)),
        TaxBracket::new(dec!(204100), dec!(0.32)),
        TaxBracket::new(dec!(510300), dec!(0.35)),
        TaxBracket::unbounded(dec!(0.37)),
    ])
    .expect("built-in federal bracket table is well-formed")
}

/// California single-filer brackets shared by both built-in editions.
fn california_brackets() -> BracketTable {
    BracketTable::new(vec![
        TaxBracket::new(dec!(8809), dec!(0.01)),
        TaxBracket::new(dec!(20883), dec!(0.02)),
        TaxBracket::new(dec!(32960), dec!(0.04)),
        TaxBracket::new(dec!(45753), dec!(0.06)),
        TaxBracket::new(dec!(57824), dec!(0.08)),
        TaxBracket::new(dec!(295373), dec!(0.093)),
        TaxBracket::new(dec!(354445), dec!(0.103)),
        TaxBracket::new(dec!(590742), dec!(0.113)),
        TaxBracket::new(dec!(1000000), dec!(0.123)),
        TaxBracket::unbounded(dec!(0.133)),
    ])
    .expect("built-in state bracket table is well-formed")
}
