//! Integration tests for the TOML schedule loader.
//!
//! The fixture mirrors the built-in 2020 edition exactly, so a loaded
//! schedule must be indistinguishable from the baked-in one — both as a
//! value and through a full liability calculation.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use takehome_cli::schedule_file;
use takehome_core::{FilingProfile, FilingType, LiabilityWorksheet, RateSchedule};

fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("schedule_2020.toml")
        .leak() // fine — this is test-only, runs once
}

#[test]
fn loaded_fixture_matches_built_in_2020_edition() {
    let loaded = schedule_file::load_from_file(fixture_path())
        .expect("fixture schedule should load without error");

    assert_eq!(loaded, RateSchedule::tax_year_2020());
}

#[test]
fn loaded_schedule_computes_the_same_liability_as_built_in() {
    let loaded = schedule_file::load_from_file(fixture_path()).unwrap();
    let built_in = RateSchedule::tax_year_2020();
    let profile = FilingProfile {
        gross_income: dec!(123456.78),
        filing_type: FilingType::Contractor,
        retirement_contribution: dec!(10000),
        mortgage_interest: dec!(7500),
        property_tax: dec!(3200),
    };

    let from_loaded = LiabilityWorksheet::new(&loaded).calculate(&profile).unwrap();
    let from_built_in = LiabilityWorksheet::new(&built_in)
        .calculate(&profile)
        .unwrap();

    assert_eq!(from_loaded, from_built_in);
}
