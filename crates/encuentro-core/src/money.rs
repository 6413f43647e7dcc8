//! # Money & Percentage Arithmetic
//!
//! Fixed-point monetary arithmetic for the single-currency deployment.
//! Amounts are stored as integer cents behind the [`Money`] newtype;
//! discount rates are stored as basis points behind [`Percentage`].
//!
//! ## Design Decision
//!
//! Floats never carry monetary values. The decimal-string wire form
//! (`"100000.00"`) is parsed into cents at the boundary and formatted back
//! out for display. All arithmetic saturates instead of wrapping — a sum of
//! registrations that overflows `i64` cents is not representable and must
//! not silently wrap into a negative balance.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A monetary amount in integer cents.
///
/// Serializes as a bare integer (cents), the form the external data store
/// uses. Display renders the decimal form with two fractional digits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Create an amount from integer cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units (saturating).
    pub fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// The amount in integer cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Clamp a negative amount to zero, leaving non-negative amounts as-is.
    pub fn clamped_non_negative(self) -> Money {
        Money(self.0.max(0))
    }

    /// Parse a decimal-string amount (`"1234.56"`, `"1234"`) into cents.
    ///
    /// Whole-number strings are treated as major units. Fractional digits
    /// beyond two are truncated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] for empty or
    /// non-numeric input, and for amounts that overflow `i64` cents.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::InvalidAmount(s.to_string()));
        }

        let invalid = || ValidationError::InvalidAmount(s.to_string());

        if let Some(dot) = s.find('.') {
            let integer_part: i64 = s[..dot].parse().map_err(|_| invalid())?;
            let frac_str = &s[dot + 1..];
            let frac_cents: i64 = match frac_str.len() {
                0 => 0,
                1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
                2 => frac_str.parse().map_err(|_| invalid())?,
                _ => frac_str[..2].parse().map_err(|_| invalid())?,
            };
            if frac_cents < 0 {
                return Err(invalid());
            }

            let sign: i64 = if s.starts_with('-') { -1 } else { 1 };
            integer_part
                .abs()
                .checked_mul(100)
                .and_then(|v| v.checked_add(frac_cents))
                .map(|v| Money(sign * v))
                .ok_or_else(invalid)
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|v| v.checked_mul(100))
                .map(Money)
                .ok_or_else(invalid)
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// A rate stored in basis points (1% = 100 bps).
///
/// Applying a percentage to an amount truncates toward zero, so a computed
/// discount never exceeds the nominal rate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(i64);

impl Percentage {
    /// Create a rate from whole percent (saturating).
    pub fn from_percent(percent: i64) -> Self {
        Self(percent.saturating_mul(100))
    }

    /// Create a rate from basis points.
    pub fn from_basis_points(bps: i64) -> Self {
        Self(bps)
    }

    /// The rate in basis points.
    pub fn basis_points(&self) -> i64 {
        self.0
    }

    /// Apply the rate to an amount: `amount × bps / 10000`, truncating.
    pub fn apply(&self, amount: Money) -> Money {
        Money(amount.cents().saturating_mul(self.0) / 10_000)
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            let abs = self.0.abs();
            let sign = if self.0 < 0 { "-" } else { "" };
            write!(f, "{}{}.{:02}%", sign, abs / 100, abs % 100)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn money_from_major_is_cents() {
        assert_eq!(Money::from_major(100_000).cents(), 10_000_000);
        assert_eq!(Money::from_major(0), Money::ZERO);
    }

    #[test]
    fn money_parse_whole_number() {
        assert_eq!(Money::parse("10000").unwrap(), Money::from_major(10_000));
        assert_eq!(Money::parse("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn money_parse_decimal() {
        assert_eq!(Money::parse("100.50").unwrap(), Money::from_cents(10_050));
        assert_eq!(Money::parse("0.01").unwrap(), Money::from_cents(1));
        assert_eq!(Money::parse("1234.567").unwrap(), Money::from_cents(123_456));
    }

    #[test]
    fn money_parse_negative() {
        assert_eq!(Money::parse("-5.25").unwrap(), Money::from_cents(-525));
        assert_eq!(Money::parse("-10").unwrap(), Money::from_major(-10));
    }

    #[test]
    fn money_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.x5").is_err());
    }

    #[test]
    fn money_display_round_trip() {
        assert_eq!(Money::from_major(80_000).to_string(), "80000.00");
        assert_eq!(Money::from_cents(450).to_string(), "4.50");
        assert_eq!(Money::from_cents(-1).to_string(), "-0.01");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn money_clamp_negative_to_zero() {
        assert_eq!(Money::from_cents(-500).clamped_non_negative(), Money::ZERO);
        assert_eq!(
            Money::from_cents(500).clamped_non_negative(),
            Money::from_cents(500)
        );
    }

    #[test]
    fn money_sum_saturates() {
        let total: Money = vec![Money::from_cents(i64::MAX), Money::from_cents(100)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn percentage_apply_whole_percent() {
        let pct = Percentage::from_percent(20);
        assert_eq!(pct.apply(Money::from_major(100_000)), Money::from_major(20_000));
    }

    #[test]
    fn percentage_apply_truncates() {
        // 4.5% of 0.33 = 0.01485 → truncates to 0.01
        let pct = Percentage::from_basis_points(450);
        assert_eq!(pct.apply(Money::from_cents(33)), Money::from_cents(1));
    }

    #[test]
    fn percentage_display() {
        assert_eq!(Percentage::from_percent(20).to_string(), "20%");
        assert_eq!(Percentage::from_basis_points(450).to_string(), "4.50%");
    }

    proptest! {
        #[test]
        fn parse_display_round_trip(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let m = Money::from_cents(cents);
            let parsed = Money::parse(&m.to_string()).unwrap();
            prop_assert_eq!(m, parsed);
        }

        #[test]
        fn clamped_is_never_negative(cents in any::<i64>()) {
            prop_assert!(!Money::from_cents(cents).clamped_non_negative().is_negative());
        }
    }
}
