//! Text rendering of a liability estimate.
//!
//! The core computes amounts; everything about their presentation —
//! currency grouping, percent-of-income, line layout — lives here.

use rust_decimal::Decimal;
use takehome_core::calculations::common::round_half_up;
use takehome_core::{FilingProfile, TaxResult};

/// Renders the full report for one profile.
///
/// Each tax line shows the dollar amount and its share of gross income.
/// With a zero gross income there is no meaningful share, so the
/// parenthetical is omitted rather than dividing by zero.
pub fn render(
    profile: &FilingProfile,
    result: &TaxResult,
) -> String {
    let gross = profile.gross_income;
    let mut out = String::new();

    out.push_str(&format!("Total Income: {}\n", format_currency(gross)));
    out.push_str(&tax_line("Social Security Tax", result.social_security_tax, gross));
    out.push_str(&tax_line("Medicare Tax", result.medicare_tax, gross));
    out.push_str(&tax_line("State Disability Tax", result.disability_tax, gross));
    out.push_str(&tax_line("State Income Tax", result.state_income_tax, gross));
    out.push_str(&tax_line("Federal Income Tax", result.federal_income_tax, gross));
    out.push_str(&tax_line("Total Tax", result.total_tax, gross));
    out.push_str(&format!(
        "Take Home Income: {}\n",
        format_currency(result.take_home_income)
    ));

    out
}

fn tax_line(
    label: &str,
    amount: Decimal,
    gross: Decimal,
) -> String {
    match percent_of(amount, gross) {
        Some(share) => format!("{label}: {} ({share})\n", format_currency(amount)),
        None => format!("{label}: {}\n", format_currency(amount)),
    }
}

/// Formats an amount as dollars with comma grouping and cent precision,
/// e.g. `$6,200.00`.
pub fn format_currency(amount: Decimal) -> String {
    let cents = round_half_up(amount);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    let text = format!("{:.2}", cents.abs());

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// `amount` as a percentage of `gross`, or `None` when gross is zero.
fn percent_of(
    amount: Decimal,
    gross: Decimal,
) -> Option<String> {
    if gross <= Decimal::ZERO {
        return None;
    }
    let share = round_half_up(amount / gross * Decimal::ONE_HUNDRED);
    Some(format!("{share:.2}%"))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use takehome_core::{FilingType, LiabilityWorksheet, RateSchedule};

    use super::*;

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(6200)), "$6,200.00");
        assert_eq!(format_currency(dec!(100000)), "$100,000.00");
        assert_eq!(format_currency(dec!(1234567.89)), "$1,234,567.89");
    }

    #[test]
    fn format_currency_handles_small_amounts() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(0.5)), "$0.50");
        assert_eq!(format_currency(dec!(999.99)), "$999.99");
    }

    #[test]
    fn format_currency_rounds_to_cents() {
        assert_eq!(format_currency(dec!(6046.337)), "$6,046.34");
    }

    #[test]
    fn format_currency_marks_negative_amounts() {
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_computes_share_of_gross() {
        assert_eq!(
            percent_of(dec!(6200), dec!(100000)),
            Some("6.20%".to_string())
        );
        assert_eq!(
            percent_of(dec!(29942.84), dec!(100000)),
            Some("29.94%".to_string())
        );
    }

    #[test]
    fn percent_of_is_none_for_zero_gross() {
        assert_eq!(percent_of(dec!(0), dec!(0)), None);
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_matches_reference_layout() {
        let schedule = RateSchedule::tax_year_2020();
        let profile = FilingProfile::new(dec!(100000), FilingType::Employee);
        let result = LiabilityWorksheet::new(&schedule)
            .calculate(&profile)
            .unwrap();

        let report = render(&profile, &result);

        assert_eq!(
            report,
            "Total Income: $100,000.00\n\
             Social Security Tax: $6,200.00 (6.20%)\n\
             Medicare Tax: $1,450.00 (1.45%)\n\
             State Disability Tax: $1,000.00 (1.00%)\n\
             State Income Tax: $6,046.34 (6.05%)\n\
             Federal Income Tax: $15,246.50 (15.25%)\n\
             Total Tax: $29,942.84 (29.94%)\n\
             Take Home Income: $70,057.16\n"
        );
    }

    #[test]
    fn render_omits_percentages_for_zero_income() {
        let schedule = RateSchedule::tax_year_2020();
        let profile = FilingProfile::new(dec!(0), FilingType::Employee);
        let result = LiabilityWorksheet::new(&schedule)
            .calculate(&profile)
            .unwrap();

        let report = render(&profile, &result);

        assert!(report.contains("Social Security Tax: $0.00\n"));
        assert!(!report.contains('%'));
    }
}
