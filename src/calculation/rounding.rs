//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every monetary figure is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to two decimal places using banker's rounding.
///
/// The result always carries a scale of two so that it prints and
/// serializes as e.g. `"50000.00"`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("20833.3333").unwrap()).to_string(), "20833.33");
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()).to_string(), "0.12");
/// assert_eq!(round_money(Decimal::new(50000, 0)).to_string(), "50000.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_SCALE);
    rounded
}
