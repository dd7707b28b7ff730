//! # Money Module
//!
//! `Money` (whole cents) and `TaxRate` (basis points). Every amount the
//! terminal, purchase form and reports show is one of these.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Amount shown        Stored as            Why                           │
//! │  ────────────        ─────────            ───                           │
//! │  $115.00       ────► Money(11500)         exact sums of many lines     │
//! │  $1.20 × 3     ────► Money(360)           no 3.5999999999999996        │
//! │  10% VAT       ────► TaxRate(1000)        rate × amount stays integer  │
//! │  VAT on $2.50  ────► 13 cents             half a cent rounds up        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopdesk_core::money::{Money, TaxRate};
//!
//! let line = Money::from_cents(11500).multiply_quantity(2);
//! assert_eq!(line.cents(), 23000);
//! assert_eq!(line.calculate_vat(TaxRate::from_percent(10)).cents(), 2300);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

// =============================================================================
// Money
// =============================================================================

/// An amount in cents.
///
/// Signed: `received − total` and `total − received` are computed before
/// being clamped to change and due.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Negative amounts become zero. A shortfall is shown as due, never as
    /// negative change.
    #[inline]
    pub fn non_negative(self) -> Self {
        self.max(Money::zero())
    }

    /// VAT on this amount, rounded half up to the cent.
    ///
    /// `(cents × bps + 5000) / 10000`, computed in `i128`.
    pub fn calculate_vat(&self, rate: TaxRate) -> Money {
        let vat = (i128::from(self.0) * i128::from(rate.bps()) + 5000) / 10000;
        Money(vat as i64)
    }

    /// Unit price × quantity (line totals, stock valuation).
    #[inline]
    pub const fn multiply_quantity(&self, quantity: i64) -> Self {
        Money(self.0 * quantity)
    }
}

/// `$238.00` style, for log fields. User-facing text goes through the
/// configured currency format instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// VAT rate in basis points: 1000 bps is 10%.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Whole percent, as on the terminal's VAT selector (10 → 10%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        TaxRate(percent * 100)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(23800).to_string(), "$238.00");
        assert_eq!(Money::from_cents(120).to_string(), "$1.20");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_line_arithmetic() {
        let towel = Money::from_cents(11500);
        let discount = Money::from_cents(2000);

        assert_eq!(towel.multiply_quantity(2).cents(), 23000);
        assert_eq!((towel.multiply_quantity(2) - discount).cents(), 21000);
        assert_eq!((towel + discount).cents(), 13500);
    }

    #[test]
    fn test_bread_sum_is_exact() {
        let total: Money = std::iter::repeat(Money::from_cents(120)).take(10).sum();
        assert_eq!(total.cents(), 1200);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::from_cents(-3800).non_negative(), Money::zero());
        assert_eq!(Money::from_cents(6200).non_negative().cents(), 6200);
    }

    #[test]
    fn test_vat() {
        let sub_total = Money::from_cents(23000);
        assert_eq!(sub_total.calculate_vat(TaxRate::from_percent(10)).cents(), 2300);
        assert_eq!(sub_total.calculate_vat(TaxRate::from_percent(15)).cents(), 3450);
        assert!(sub_total.calculate_vat(TaxRate::default()).is_zero());

        // 12.5 cents
        let coke = Money::from_cents(250);
        assert_eq!(coke.calculate_vat(TaxRate::from_percent(5)).cents(), 13);
    }

    #[test]
    fn test_tax_rate_units() {
        assert_eq!(TaxRate::from_percent(15), TaxRate::from_bps(1500));
        assert_eq!(TaxRate::default().bps(), 0);
    }
}
