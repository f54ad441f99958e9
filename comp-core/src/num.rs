//! Shared numeric helpers.

use rust_decimal::Decimal;

/// Rounds to two decimal places with half-up (away from zero) rounding,
/// the standard convention for monetary display values.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole number, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
