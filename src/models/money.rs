//! Money type for representing currency amounts
//!
//! Wraps `rust_decimal::Decimal` so that tax, fixed-expense and monthly
//! balance arithmetic is exact. Display rounds to two places; the plain
//! textual form used for persistence keeps the full value.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Currency symbol used when none is configured
pub const DEFAULT_SYMBOL: &str = "Rs.";

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use ledger::models::Money;
    /// use rust_decimal_macros::dec;
    /// let amount = Money::new(dec!(100.50));
    /// assert_eq!(amount.to_string(), "Rs.100.50");
    /// ```
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from a whole number of currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Sum of two amounts, or `None` if it does not fit
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Difference of two amounts, or `None` if it does not fit
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// `percent` per cent of this amount, or `None` on overflow
    pub fn checked_percent(&self, percent: Decimal) -> Option<Self> {
        self.0
            .checked_mul(percent)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .map(Self)
    }

    /// Multiply by a plain factor (e.g. `0.10`), or `None` on overflow
    pub fn checked_scale(&self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Split evenly into `parts`
    pub fn divide(&self, parts: u32) -> Self {
        Self(self.0 / Decimal::from(parts))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "2500", "2500.50", "-10.50", "+10.50", "Rs.10.50", "$10.50",
    /// "1,000,000" and scientific notation such as "1.4E7".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let rest = rest
            .strip_prefix(DEFAULT_SYMBOL)
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim_start();
        let digits = rest.replace(',', "");
        if digits.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.trim().to_string()));
        }

        let value = Decimal::from_str(&digits)
            .or_else(|_| Decimal::from_scientific(&digits))
            .map_err(|_| MoneyParseError::InvalidFormat(s.trim().to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Plain decimal text without a symbol, exact to the stored scale
    pub fn to_plain_string(&self) -> String {
        self.0.to_string()
    }

    /// Format with a currency symbol, rounded to two places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.round_dp(2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "No amount given"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(100.5)).to_string(), "Rs.100.50");
        assert_eq!(Money::zero().to_string(), "Rs.0.00");
        assert_eq!(Money::new(dec!(-10.5)).to_string(), "-Rs.10.50");
        assert_eq!(Money::new(dec!(0.05)).to_string(), "Rs.0.05");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Money::new(dec!(35625.004)).to_string(), "Rs.35625.00");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "Rs.0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::new(dec!(67500));
        assert_eq!(m.format_with_symbol("$"), "$67500.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!(a + b, Money::from_units(1500));
        assert_eq!(a - b, Money::from_units(500));
        assert_eq!(-a, Money::from_units(-1000));
        assert_eq!(a.checked_percent(dec!(10)), Some(Money::from_units(100)));
        assert_eq!(a.checked_scale(dec!(0.10)), Some(Money::from_units(100)));
        assert_eq!(a.checked_add(b), Some(Money::from_units(1500)));
        assert_eq!(b.checked_sub(a), Some(Money::from_units(-500)));
        assert_eq!(Money::from_units(810_000).divide(12), Money::from_units(67_500));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse("Rs.10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse("$10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse("-10.50").unwrap().value(), dec!(-10.50));
        assert_eq!(Money::parse("+10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse(" 2500 ").unwrap().value(), dec!(2500));
        assert_eq!(Money::parse("1,000,000").unwrap().value(), dec!(1000000));
        assert_eq!(Money::parse("1.4E7").unwrap().value(), dec!(14000000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("12.5.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-+5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("++5").is_err());
    }

    #[test]
    fn test_plain_string_is_exact() {
        let m = Money::new(dec!(200.25));
        assert_eq!(m.to_plain_string(), "200.25");
        assert_eq!(Money::parse(&m.to_plain_string()).unwrap(), m);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_units(100).is_positive());
        assert!(Money::from_units(-100).is_negative());
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from_units(1)), None);
        assert_eq!((-max).checked_sub(Money::from_units(1)), None);
        assert_eq!(max.checked_percent(dec!(30)), None);
        assert_eq!(max.checked_scale(dec!(2)), None);
        assert_eq!(max.checked_percent(dec!(0)), Some(Money::zero()));
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(dec!(1050.5));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"1050.5\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
