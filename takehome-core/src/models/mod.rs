mod filing_profile;
mod filing_type;
mod rate_schedule;
mod tax_bracket;

pub use filing_profile::FilingProfile;
pub use filing_type::FilingType;
pub use rate_schedule::{MedicareSurtax, RateSchedule, ScheduleError};
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
