use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Money type with 8 decimal places precision so interest never loses cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    /// largest representable amount, where saturating arithmetic stops
    pub const MAX: Money = Money(Decimal::MAX);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(8)))
    }

    /// create from integer amount (rupees, dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// render with a fixed number of decimals, halves rounded away from zero
    pub fn to_fixed(&self, dp: u32) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", dp as usize, rounded)
    }

    /// check if strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if there is no fractional part
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// addition that returns None instead of overflowing
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

// operators saturate at the representable range instead of panicking
impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0).round_dp(8))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).round_dp(8))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// monthly interest rate, stored as a fraction (0.02 for 2% per month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from percentage (e.g., 2 for 2% per month)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// parse a percentage string such as "1.5"
    pub fn from_percentage_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Rate::from_percentage(Decimal::from_str(s.trim())?))
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// per-day share of the monthly rate for a month of the given length
    pub fn per_day(&self, days_in_month: u32) -> Rate {
        Rate(self.0 / Decimal::from(days_in_month))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(Money::from_str_exact("2.345").unwrap().to_fixed(2), "2.35");
        assert_eq!(Money::from_str_exact("2.355").unwrap().to_fixed(2), "2.36");
        assert_eq!(Money::from_major(7).to_fixed(2), "7.00");
        assert_eq!(Money::from_major(7).to_fixed(0), "7");
    }

    #[test]
    fn test_is_whole() {
        assert!(Money::from_major(100).is_whole());
        assert!(Money::from_str_exact("100.00").unwrap().is_whole());
        assert!(!Money::from_str_exact("100.5").unwrap().is_whole());
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::from_major(1), Money::from_major(2), Money::from_major(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(6));
    }

    #[test]
    fn test_checked_and_saturating_add() {
        assert_eq!(Money::MAX.checked_add(Money::from_major(1)), None);
        assert_eq!(
            Money::from_major(2).checked_add(Money::from_major(3)),
            Some(Money::from_major(5))
        );
        assert_eq!(Money::MAX + Money::from_major(1), Money::MAX);
        assert_eq!(Money::ZERO - Money::MAX - Money::MAX, Money::ZERO - Money::MAX);
    }

    #[test]
    fn test_rate_percentage_roundtrip() {
        let rate = Rate::from_percentage(dec!(1.5));
        assert_eq!(rate.as_decimal(), dec!(0.015));
        assert_eq!(rate.as_percentage(), dec!(1.5));
        assert_eq!(rate.to_string(), "1.5%");
    }

    #[test]
    fn test_per_day_rate() {
        let rate = Rate::from_percentage(dec!(3));
        assert_eq!(rate.per_day(30).as_decimal(), dec!(0.001));
        assert!(rate.per_day(28) > rate.per_day(31));
    }
}
