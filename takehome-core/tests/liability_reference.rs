//! Hand-computed reference table for the full liability pipeline.
//!
//! These complement the unit tests inside liability.rs (which exercise
//! each category helper in isolation) by pinning the composed results
//! against arithmetic worked out by hand from the 2020 rate schedule.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use takehome_core::{FilingProfile, FilingType, LiabilityWorksheet, RateSchedule};

/// Gross 100,000, employee, no deductions, 2020 schedule.
///
/// Reference arithmetic:
///   social security  0.062  × 100000                     =  6200.00
///   medicare         0.0145 × 100000 (below surtax)      =  1450.00
///   disability       0.01   × 100000 (below 122909 cap)  =  1000.00
///   state base       100000 − 4537                       = 95463
///   state tax        88.09 + 241.48 + 483.08 + 767.58
///                    + 965.68 + 37639 × 0.093            =  6046.34
///   itemized         min(10000, 6046.34) + 0 + 250       =  6296.34
///   federal base     100000 − max(6296.34, 12200)        = 87800
///   federal tax      970 + 3573 + 9839.50 + 3600 × 0.24  = 15246.50
///   total                                                = 29942.84
///   take-home        100000 − 29942.84                   = 70057.16
#[test]
fn employee_100k_no_deductions_matches_reference_table() {
    let schedule = RateSchedule::tax_year_2020();
    let worksheet = LiabilityWorksheet::new(&schedule);
    let profile = FilingProfile::new(dec!(100000), FilingType::Employee);

    let result = worksheet.calculate(&profile).unwrap();

    assert_eq!(result.social_security_tax, dec!(6200.00));
    assert_eq!(result.medicare_tax, dec!(1450.00));
    assert_eq!(result.disability_tax, dec!(1000.00));
    assert_eq!(result.state_income_tax, dec!(6046.34));
    assert_eq!(result.federal_income_tax, dec!(15246.50));
    assert_eq!(result.total_tax, dec!(29942.84));
    assert_eq!(result.take_home_income, dec!(70057.16));
    assert_eq!(result.state_taxable_income, dec!(95463));
    assert_eq!(result.federal_taxable_income, dec!(87800));
    assert!(!result.used_itemized_deduction);
}

/// Gross 100,000, employee, retirement 19,000, mortgage 20,000,
/// property tax 8,000, 2020 schedule — the itemizing path.
///
/// Reference arithmetic:
///   state base       100000 − 4537 − 19000               = 76463
///   state tax        2545.91 + 18639 × 0.093             =  4279.34
///   itemized         min(10000, 4279.34 + 8000)
///                    + 20000 + 250                       = 30250.00
///   federal base     100000 − 30250 − 19000              = 50750
///   federal tax      970 + 3573 + 11275 × 0.22           =  7023.50
///   total            6200 + 1450 + 1000
///                    + 4279.34 + 7023.50                 = 19952.84
///   take-home        100000 − 19952.84 − 19000           = 61047.16
#[test]
fn employee_100k_itemizing_matches_reference_table() {
    let schedule = RateSchedule::tax_year_2020();
    let worksheet = LiabilityWorksheet::new(&schedule);
    let profile = FilingProfile {
        gross_income: dec!(100000),
        filing_type: FilingType::Employee,
        retirement_contribution: dec!(19000),
        mortgage_interest: dec!(20000),
        property_tax: dec!(8000),
    };

    let result = worksheet.calculate(&profile).unwrap();

    assert_eq!(result.social_security_tax, dec!(6200.00));
    assert_eq!(result.medicare_tax, dec!(1450.00));
    assert_eq!(result.disability_tax, dec!(1000.00));
    assert_eq!(result.state_income_tax, dec!(4279.34));
    assert_eq!(result.federal_income_tax, dec!(7023.50));
    assert_eq!(result.federal_deduction, dec!(30250.00));
    assert!(result.used_itemized_deduction);
    assert_eq!(result.total_tax, dec!(19952.84));
    assert_eq!(result.take_home_income, dec!(61047.16));
}

/// Gross 250,000, employee, no deductions, 2020 schedule — exercises
/// both wage caps and the medicare surtax at once.
///
/// Reference arithmetic:
///   social security  0.062 × 137700 (capped)             =  8537.40
///   medicare         0.0145 × 250000 + 0.009 × 50000     =  4075.00
///   disability       0.01 × 122909 (capped)              =  1229.09
///   state base       250000 − 4537                       = 245463
///   state tax        2545.91 + 187639 × 0.093            = 19996.34
///   itemized         min(10000, 19996.34) + 0 + 250      = 10250.00
///   federal base     250000 − 12200                      = 237800
///   federal tax      46628.50 + 33700 × 0.35             = 58423.50
#[test]
fn employee_250k_caps_and_surtax_match_reference_table() {
    let schedule = RateSchedule::tax_year_2020();
    let worksheet = LiabilityWorksheet::new(&schedule);
    let profile = FilingProfile::new(dec!(250000), FilingType::Employee);

    let result = worksheet.calculate(&profile).unwrap();

    assert_eq!(result.social_security_tax, dec!(8537.40));
    assert_eq!(result.medicare_tax, dec!(4075.00));
    assert_eq!(result.disability_tax, dec!(1229.09));
    assert_eq!(result.state_income_tax, dec!(19996.34));
    assert_eq!(result.federal_income_tax, dec!(58423.50));
}

#[test]
fn contractor_doubles_employee_payroll_taxes_below_the_caps() {
    // 80,000 gross on the 2019 schedule: below both caps, no surtax, so
    // the contractor amounts are exactly twice the employee amounts.
    let schedule = RateSchedule::tax_year_2019();
    let worksheet = LiabilityWorksheet::new(&schedule);
    let employee = FilingProfile::new(dec!(80000), FilingType::Employee);
    let contractor = FilingProfile::new(dec!(80000), FilingType::Contractor);

    let employee_result = worksheet.calculate(&employee).unwrap();
    let contractor_result = worksheet.calculate(&contractor).unwrap();

    assert_eq!(
        contractor_result.social_security_tax,
        employee_result.social_security_tax * Decimal::TWO
    );
    assert_eq!(
        contractor_result.medicare_tax,
        employee_result.medicare_tax * Decimal::TWO
    );
    // Disability never doubles.
    assert_eq!(
        contractor_result.disability_tax,
        employee_result.disability_tax
    );
}

#[test]
fn social_security_is_strictly_proportional_below_the_cap() {
    let schedule = RateSchedule::tax_year_2020();
    let worksheet = LiabilityWorksheet::new(&schedule);

    for gross in [dec!(10000), dec!(50000), dec!(100000), dec!(137700)] {
        let profile = FilingProfile::new(gross, FilingType::Employee);
        let result = worksheet.calculate(&profile).unwrap();

        assert_eq!(result.social_security_tax, gross * dec!(0.062));
    }
}

#[test]
fn total_tax_is_monotonically_non_decreasing_in_income() {
    let schedule = RateSchedule::tax_year_2020();
    let worksheet = LiabilityWorksheet::new(&schedule);
    let mut previous = Decimal::ZERO;

    // Prime-sized steps land on both sides of caps, thresholds, and the
    // standard/itemized crossover.
    let mut gross = Decimal::ZERO;
    while gross < dec!(400000) {
        let profile = FilingProfile::new(gross, FilingType::Employee);
        let result = worksheet.calculate(&profile).unwrap();

        assert!(
            result.total_tax >= previous,
            "total tax decreased from {previous} to {} at gross {gross}",
            result.total_tax
        );
        previous = result.total_tax;
        gross += dec!(4973);
    }
}

#[test]
fn identical_inputs_yield_identical_results_across_editions() {
    for schedule in [RateSchedule::tax_year_2019(), RateSchedule::tax_year_2020()] {
        let worksheet = LiabilityWorksheet::new(&schedule);
        let profile = FilingProfile {
            gross_income: dec!(98765.43),
            filing_type: FilingType::Contractor,
            retirement_contribution: dec!(6000),
            mortgage_interest: dec!(11000),
            property_tax: dec!(4200),
        };

        let first = worksheet.calculate(&profile).unwrap();
        let second = worksheet.calculate(&profile).unwrap();

        assert_eq!(first, second);
    }
}
