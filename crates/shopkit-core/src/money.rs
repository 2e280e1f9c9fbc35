//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    $10.00 × (1 − 0.1) = 9.000000000000002 after a few conversions       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents − round(1000 × 1000 bps / 10000) = 900 cents              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::money::Money;
//! use shopkit_core::types::DiscountRate;
//!
//! let price = Money::from_major_minor(10, 0); // $10.00
//! let discounted = price.apply_discount(DiscountRate::from_bps(1000));
//! assert_eq!(discounted, Money::from_cents(900));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist so range checks can see them
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a decimal amount in major units (e.g. a JSON number) into cents.
    ///
    /// Returns `None` for NaN, infinities, and amounts outside the `i64` cent range.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(10.5), Some(Money::from_cents(1050)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount itself is rounded half away from zero to the cent:
    /// `(amount * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    /// use shopkit_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let discounted = subtotal.apply_discount(DiscountRate::from_bps(2000)); // 20% off
    /// assert_eq!(discounted.cents(), 8000);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(self.0 - discount_amount as i64)
    }

    /// Formats the amount like [`Display`](fmt::Display) but drops a `.00` suffix.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).to_compact_string(), "$10");
    /// assert_eq!(Money::from_cents(1050).to_compact_string(), "$10.50");
    /// ```
    pub fn to_compact_string(&self) -> String {
        if self.cents_part() == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}${}", sign, self.dollars().abs())
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(10.0), Some(Money::from_cents(1000)));
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_decimal(-10.0), Some(Money::from_cents(-1000)));
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(1e300), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_compact_display() {
        assert_eq!(Money::from_cents(1000).to_compact_string(), "$10");
        assert_eq!(Money::from_cents(-200).to_compact_string(), "-$2");
        assert_eq!(Money::from_cents(1099).to_compact_string(), "$10.99");
    }

    #[test]
    fn test_apply_discount() {
        let price = Money::from_cents(1000);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 900);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(2000)).cents(), 800);
        assert_eq!(price.apply_discount(DiscountRate::zero()), price);

        // 15% of $0.99 = 14.85 cents → 15 cents off
        let odd = Money::from_cents(99);
        assert_eq!(odd.apply_discount(DiscountRate::from_bps(1500)).cents(), 84);
    }

    #[test]
    fn test_sign_checks() {
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
