//! Shared helpers for the calculation engines.

use rust_decimal::Decimal;

/// Rounds a rupee amount to exactly two decimal places using half-up
/// rounding (midpoints round away from zero), the standard financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use finplan_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12500.454)), dec!(12500.45));
/// assert_eq!(round_half_up(dec!(12500.455)), dec!(12500.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn round_half_up_preserves_two_decimal_values() {
        assert_eq!(round_half_up(dec!(28600.00)), dec!(28600.00));
    }

    #[test]
    fn round_half_up_truncates_below_midpoint() {
        assert_eq!(round_half_up(dec!(1100.004)), dec!(1100.00));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(200), dec!(100)), dec!(200));
        assert_eq!(max(dec!(-50), Decimal::ZERO), Decimal::ZERO);
    }
}
