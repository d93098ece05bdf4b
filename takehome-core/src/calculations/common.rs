//! Shared helpers for monetary arithmetic.

use rust_decimal::Decimal;

/// Rounds a decimal value to cent precision using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(6046.337)), dec!(6046.34));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a value at zero. Taxable bases may legitimately go negative
/// once deductions exceed income; no tax computation ever sees a
/// negative base.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
