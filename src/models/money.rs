//! Money type for income amounts
//!
//! Amounts are held as integer cents so totals never drift. On the wire they
//! travel as plain JSON numbers of currency units (`12.5`), which is the shape
//! the extraction service produces.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude, in currency units, a single amount may carry
    pub const MAX_UNITS: f64 = 1e13;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use incomeflow::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.plain_decimal(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a number of currency units, rounding to the
    /// nearest cent. Non-finite input becomes zero and out-of-range input is
    /// clamped to [`Money::MAX_UNITS`].
    ///
    /// # Examples
    /// ```
    /// use incomeflow::models::Money;
    /// assert_eq!(Money::from_units(19.99).cents(), 1999);
    /// ```
    pub fn from_units(units: f64) -> Self {
        if !units.is_finite() {
            return Self::zero();
        }
        Self::to_cents(units.clamp(-Self::MAX_UNITS, Self::MAX_UNITS))
    }

    /// Like [`Money::from_units`], but `None` for non-finite or out-of-range
    /// input
    pub fn try_from_units(units: f64) -> Option<Self> {
        if units.is_finite() && units.abs() <= Self::MAX_UNITS {
            Some(Self::to_cents(units))
        } else {
            None
        }
    }

    fn to_cents(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a floating point number of currency units
    pub fn units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Divide by a count, rounding half away from zero
    pub fn divide(&self, count: u64) -> Self {
        if count == 0 {
            return *self;
        }
        let count = count as i64;
        let half = count / 2;
        let rounded = if self.0 >= 0 {
            self.0.saturating_add(half) / count
        } else {
            self.0.saturating_sub(half) / count
        };
        Self(rounded)
    }

    /// Shortest decimal rendering without a currency symbol or trailing zeros
    ///
    /// `500` for 500.00, `12.5` for 12.50, `0.05` for 0.05.
    pub fn plain_decimal(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 100;
        let frac = abs % 100;

        if frac == 0 {
            format!("{}{}", sign, whole)
        } else if frac % 10 == 0 {
            format!("{}{}.{}", sign, whole, frac / 10)
        } else {
            format!("{}{}.{:02}", sign, whole, frac)
        }
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_thousands(self.whole().unsigned_abs());
        format!("{}{}{}.{:02}", sign, symbol, whole, self.cents_part())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.units())
        }
    }
}

/// Accepts a number or numeric string; `null` is zero. Amounts outside
/// [`Money::MAX_UNITS`] are rejected.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Money::zero()),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
            _ => None,
        }
        .ok_or_else(|| D::Error::custom("amount is not a number"))?;

        Money::try_from_units(units)
            .ok_or_else(|| D::Error::custom(format!("amount {} is out of range", units)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units_rounds_to_cents() {
        assert_eq!(Money::from_units(10.5).cents(), 1050);
        assert_eq!(Money::from_units(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_units(-4.25).cents(), -425);
        assert_eq!(Money::from_units(f64::NAN), Money::zero());
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(Money::from_cents(50000).plain_decimal(), "500");
        assert_eq!(Money::from_cents(1250).plain_decimal(), "12.5");
        assert_eq!(Money::from_cents(1999).plain_decimal(), "19.99");
        assert_eq!(Money::from_cents(5).plain_decimal(), "0.05");
        assert_eq!(Money::from_cents(-250).plain_decimal(), "-2.5");
        assert_eq!(Money::zero().plain_decimal(), "0");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "$1,234,567.89");
        assert_eq!(Money::from_cents(100000).format_with_symbol("€"), "€1,000.00");
    }

    #[test]
    fn test_divide() {
        assert_eq!(Money::from_cents(80000).divide(1).cents(), 80000);
        assert_eq!(Money::from_cents(1000).divide(3).cents(), 333);
        assert_eq!(Money::from_cents(1001).divide(2).cents(), 501);
        assert_eq!(Money::from_cents(-1001).divide(2).cents(), -501);
        assert_eq!(Money::from_cents(500).divide(0).cents(), 500);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_uses_units() {
        assert_eq!(serde_json::to_string(&Money::from_cents(50000)).unwrap(), "500");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let parsed: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(parsed.cents(), 1999);
        let parsed: Money = serde_json::from_str("300").unwrap();
        assert_eq!(parsed.cents(), 30000);
        let parsed: Money = serde_json::from_str("\"1,250.75\"").unwrap();
        assert_eq!(parsed.cents(), 125075);
        let parsed: Money = serde_json::from_str("null").unwrap();
        assert!(parsed.is_zero());
    }

    #[test]
    fn test_out_of_range_amounts() {
        assert!(Money::try_from_units(1e17).is_none());
        assert!(Money::try_from_units(f64::INFINITY).is_none());
        assert_eq!(Money::try_from_units(-12.5), Some(Money::from_cents(-1250)));
        assert_eq!(Money::from_units(1e17), Money::from_units(Money::MAX_UNITS));

        assert!(serde_json::from_str::<Money>("1e17").is_err());
        assert!(serde_json::from_str::<Money>("\"lots\"").is_err());
        assert!(serde_json::from_str::<Money>("[1]").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));

        let mut total = max;
        total += Money::from_cents(100);
        assert_eq!(total, max);
        assert_eq!(max.divide(2), Money::from_cents(i64::MAX / 2));
    }
}
