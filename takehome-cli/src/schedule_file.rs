//! TOML loader for user-supplied rate schedules.
//!
//! A schedule file carries every constant for one tax year; loading one
//! replaces a built-in edition wholesale. Decimal values are written as
//! strings so they parse exactly, never through a float.
//!
//! ## Format
//!
//! | Key | Required | Notes |
//! |------------------------------|----------|--------------------------------------|
//! | `tax_year` | yes | integer |
//! | `social_security_rate` | yes | employee baseline, e.g. `"0.062"` |
//! | `social_security_wage_cap` | yes | |
//! | `medicare_rate` | yes | employee baseline |
//! | `disability_rate` | yes | |
//! | `disability_wage_cap` | yes | |
//! | `state_standard_deduction` | yes | |
//! | `federal_standard_deduction` | yes | |
//! | `local_tax_deduction_limit` | yes | |
//! | `donation_allowance` | no | omit when the edition has none |
//! | `[medicare_surtax]` | no | `threshold` + `rate` |
//! | `[[state_brackets]]` | yes | `rate`, optional `upper_bound` |
//! | `[[federal_brackets]]` | yes | last bracket omits `upper_bound` |
//!
//! ### Minimal example
//!
//! ```toml
//! tax_year = 2021
//! social_security_rate = "0.062"
//! social_security_wage_cap = "142800"
//! medicare_rate = "0.0145"
//! disability_rate = "0.012"
//! disability_wage_cap = "128298"
//! state_standard_deduction = "4601"
//! federal_standard_deduction = "12550"
//! local_tax_deduction_limit = "10000"
//!
//! [[state_brackets]]
//! upper_bound = "8932"
//! rate = "0.01"
//!
//! [[state_brackets]]
//! rate = "0.02"
//!
//! [[federal_brackets]]
//! upper_bound = "9950"
//! rate = "0.10"
//!
//! [[federal_brackets]]
//! rate = "0.12"
//! ```

use std::fs;
use std::path::Path;

use takehome_core::{RateSchedule, ScheduleError};
use thiserror::Error;

/// Errors that can occur while loading a schedule file.
#[derive(Debug, Error)]
pub enum ScheduleFileError {
    /// The file could not be read at all.
    #[error("cannot read schedule file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The TOML structure did not match the schedule format.
    #[error("schedule parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but describes an unusable schedule (bad rate,
    /// malformed bracket table, ...). Fatal; never guessed around.
    #[error("invalid schedule: {0}")]
    Invalid(#[from] ScheduleError),
}

/// Parses and validates a schedule from TOML text.
pub fn parse(text: &str) -> Result<RateSchedule, ScheduleFileError> {
    let schedule: RateSchedule = toml::from_str(text)?;
    schedule.validate()?;
    Ok(schedule)
}

/// Loads and validates a schedule file from disk.
pub fn load_from_file(path: &Path) -> Result<RateSchedule, ScheduleFileError> {
    let text = fs::read_to_string(path).map_err(|source| ScheduleFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}
