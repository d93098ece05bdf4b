//! CSV loader for batch liability runs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). All
//! header names are case-sensitive and must match exactly.
//!
//! | Column        | Required | Type    | Notes                                    |
//! |---------------|----------|---------|------------------------------------------|
//! | `income`      | yes      | decimal | e.g. `100000.00`                         |
//! | `filing_type` | no       | string  | `employee`/`w2` or `contractor`/`1099`; empty cell means employee |
//! | `retirement`  | no       | decimal | Leave cell empty for 0                   |
//! | `mortgage`    | no       | decimal | Leave cell empty for 0                   |
//! | `property_tax`| no       | decimal | Leave cell empty for 0                   |
//!
//! ### Example
//!
//! ```csv
//! income,filing_type,retirement,mortgage,property_tax
//! 100000.00,employee,19000.00,,
//! 85000.00,1099,,12000.00,6500.00
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use takehome_core::{FilingProfile, FilingType};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    income: Decimal,
    #[serde(default)]
    filing_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    retirement: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    mortgage: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    property_tax: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be opened.
    #[error("cannot open profile file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `filing_type` cell contained a value that is not one of the
    /// recognised codes. `row` is 1-based (header = row 0).
    #[error("unrecognised filing type '{value}' on row {row}")]
    InvalidFilingType { value: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a FilingProfile.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<FilingProfile, CsvLoadError> {
    let filing_type = match row.filing_type.as_deref().map(str::trim) {
        None | Some("") => FilingType::default(),
        Some(code) => {
            FilingType::parse(code).ok_or_else(|| CsvLoadError::InvalidFilingType {
                value: code.to_string(),
                row: row_number,
            })?
        }
    };

    Ok(FilingProfile {
        gross_income: row.income,
        filing_type,
        retirement_contribution: row.retirement.unwrap_or(Decimal::ZERO),
        mortgage_interest: row.mortgage.unwrap_or(Decimal::ZERO),
        property_tax: row.property_tax.unwrap_or(Decimal::ZERO),
    })
}

/// Parse filing profiles from a CSV reader.
///
/// The reader can be any type that implements `Read`, such as a file or
/// a string slice.
pub fn parse<R: Read>(reader: R) -> Result<Vec<FilingProfile>, CsvLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        profiles.push(convert_row(row, index + 1)?);
    }

    Ok(profiles)
}

/// Load filing profiles from a CSV file on disk.
pub fn load_from_file(path: &Path) -> Result<Vec<FilingProfile>, CsvLoadError> {
    let file = File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(file)
}
