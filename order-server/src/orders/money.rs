//! Money arithmetic
//!
//! Amounts travel as `f64` on the wire and in the database; every
//! computation goes through [`Decimal`] and the result is rounded to
//! 2 decimal places, midpoint away from zero.

use rust_decimal::prelude::*;

/// Convert a wire amount into a [`Decimal`]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to 2 decimal places (midpoint away from zero) and convert back
/// to the wire form
pub fn to_amount(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_addition_is_exact() {
        // 0.1 + 0.2 is the classic binary float trap
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_amount(sum), 0.3);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let value = Decimal::from_str("2.675").unwrap();
        assert_eq!(to_amount(value), 2.68);

        let value = Decimal::from_str("2.665").unwrap();
        assert_eq!(to_amount(value), 2.67);
    }

    #[test]
    fn test_line_total() {
        // 3 × 1.115 = 3.345 → 3.35
        let total = to_decimal(1.115) * Decimal::from(3);
        assert_eq!(to_amount(total), 3.35);
    }

    #[test]
    fn test_whole_amounts_pass_through() {
        let total = to_decimal(10.0) * Decimal::from(2);
        assert_eq!(to_amount(total), 20.0);
    }
}
