use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the filer earns their income, which decides who pays the employer
/// share of payroll taxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilingType {
    /// W-2 employee; the employer pays its half of payroll taxes.
    #[default]
    Employee,
    /// 1099 contractor; the filer covers both halves of payroll taxes.
    Contractor,
}

impl FilingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Contractor => "contractor",
        }
    }

    /// Parses a filing-type code. Accepts the long names and the common
    /// IRS form shorthands, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" | "w2" | "w-2" => Some(Self::Employee),
            "contractor" | "1099" | "self-employed" => Some(Self::Contractor),
            _ => None,
        }
    }

    /// Number of payroll tax shares this filer pays.
    ///
    /// Contractors pay both the employee and the employer share, so their
    /// social security and medicare rates are the employee baseline times
    /// this multiplier. The multiplier never touches the schedule's stored
    /// rates.
    pub fn payroll_share_multiplier(&self) -> Decimal {
        match self {
            Self::Employee => Decimal::ONE,
            Self::Contractor => Decimal::TWO,
        }
    }
}
