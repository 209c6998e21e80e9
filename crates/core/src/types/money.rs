//! Monetary amounts using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with two fractional digits.
///
/// All amounts in the demo are US dollars; the type exists so totals are
/// computed with decimal arithmetic instead of floats. Construct from cents
/// to guarantee the two-decimal invariant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount from a raw decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a whole number of cents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_cents(cents: i64) -> Self {
        let abs = cents.unsigned_abs();
        Self(Decimal::from_parts(
            abs as u32,
            (abs >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display (e.g., `$19.99`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1999).display(), "$19.99");
        assert_eq!(Money::from_cents(100).display(), "$1.00");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_from_cents_negative() {
        assert_eq!(Money::from_cents(-250).display(), "$-2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1050);
        let b = Money::from_cents(950);
        assert_eq!(a + b, Money::from_cents(2000));
        assert_eq!(a * 3, Money::from_cents(3150));
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].map(Money::from_cents).into_iter().sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_serde_roundtrip() {
        let money = Money::from_cents(4999);
        let json = serde_json::to_string(&money).unwrap();
        // serde-with-str keeps decimals exact as strings
        assert_eq!(json, "\"49.99\"");

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
