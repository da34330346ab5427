//! Monetary arithmetic shared by the settlement rules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits every monetary component is rounded to.
///
/// All components share this scale, so sums and differences of components
/// are exact.
pub const MONEY_SCALE: u32 = 10;

/// Rounds a monetary amount to [`MONEY_SCALE`] digits, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Pays `days` days of `monthly_salary` at `monthly_salary / divisor` per day.
///
/// Multiplies before dividing so whole-salary results stay exact.
pub fn daily_amount(monthly_salary: Decimal, days: Decimal, divisor: u32) -> Decimal {
    round_money(monthly_salary * days / Decimal::from(divisor))
}
