//! # Checkout Calculator
//!
//! Turns the cart plus the cashier's adjustments into the amounts shown on
//! the terminal, and freezes the cart into a [`Sale`] on confirmation.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. sub_total    = Σ price × quantity                                   │
//! │  2. vat_amount   = sub_total × vat%                                     │
//! │  3. total_amount = sub_total + vat_amount − discount + shipping         │
//! │  4. change       = max(received − total_amount, 0)                      │
//! │  5. due          = max(total_amount − received, 0)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discount is a flat amount. The terminal's "percent" discount selector is
//! not wired to any calculation and has no counterpart here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::error::CoreResult;
use crate::money::{Money, TaxRate};
use crate::types::{Sale, SaleItem, SaleStatus};
use crate::validation::{validate_amount_cents, validate_vat_bps};

/// Cashier-entered values that modify the cart subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct Adjustments {
    pub vat: TaxRate,
    /// Flat amount subtracted from the total.
    pub discount: Money,
    /// Flat amount added to the total.
    pub shipping: Money,
    /// Amount tendered by the customer.
    pub received: Money,
}

impl Adjustments {
    /// Rejects values the payment panel could never produce: VAT above
    /// 100%, or a negative or out-of-range amount.
    pub fn validate(&self) -> CoreResult<()> {
        validate_vat_bps(self.vat.bps())?;
        validate_amount_cents("discount", self.discount.cents())?;
        validate_amount_cents("shipping", self.shipping.cents())?;
        validate_amount_cents("received", self.received.cents())?;
        Ok(())
    }
}

/// Every figure the terminal displays for the current cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutTotals {
    pub sub_total: Money,
    pub vat_amount: Money,
    pub total_amount: Money,
    pub change_amount: Money,
    pub due_amount: Money,
}

/// Derives the checkout totals.
///
/// Pure: the same lines and adjustments always give the same totals.
///
/// ## Example
/// ```rust
/// use shopdesk_core::checkout::{calculate, Adjustments};
/// use shopdesk_core::{CartLine, Money, Product, TaxRate};
///
/// let lines = vec![CartLine::new(Product::new("1", "Hair Towel", 11500, 100, "Cloth"), 2)];
/// let totals = calculate(
///     &lines,
///     &Adjustments {
///         vat: TaxRate::from_percent(10),
///         discount: Money::from_cents(2000),
///         shipping: Money::from_cents(500),
///         received: Money::from_cents(20000),
///     },
/// );
///
/// assert_eq!(totals.sub_total.cents(), 23000);
/// assert_eq!(totals.vat_amount.cents(), 2300);
/// assert_eq!(totals.total_amount.cents(), 23800);
/// assert_eq!(totals.due_amount.cents(), 3800);
/// assert!(totals.change_amount.is_zero());
/// ```
pub fn calculate(lines: &[CartLine], adjustments: &Adjustments) -> CheckoutTotals {
    let sub_total: Money = lines.iter().map(CartLine::line_total).sum();
    let vat_amount = sub_total.calculate_vat(adjustments.vat);
    let total_amount = sub_total + vat_amount - adjustments.discount + adjustments.shipping;

    CheckoutTotals {
        sub_total,
        vat_amount,
        total_amount,
        change_amount: (adjustments.received - total_amount).non_negative(),
        due_amount: (total_amount - adjustments.received).non_negative(),
    }
}

/// Freezes cart lines into a completed sale.
///
/// Each line becomes a [`SaleItem`] carrying the line's price at this
/// moment. The sale total is `totals.total_amount`. Stock is untouched.
pub fn materialize_sale(
    id: impl Into<String>,
    date: NaiveDate,
    customer: impl Into<String>,
    lines: &[CartLine],
    totals: &CheckoutTotals,
) -> Sale {
    Sale {
        id: id.into(),
        date,
        customer: customer.into(),
        items: lines
            .iter()
            .map(|line| SaleItem::snapshot(&line.product, line.quantity))
            .collect(),
        total_cents: totals.total_amount.cents(),
        status: SaleStatus::Completed,
    }
}

// =============================================================================
// Payment & Receipt
// =============================================================================

/// How the customer paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
    #[serde(rename = "Mobile Banking")]
    MobileBanking,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

/// What the terminal shows after a sale is saved.
///
/// Payment type, note and tendered/change/due live here only. The
/// recorded [`Sale`] does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutReceipt {
    pub sale: Sale,
    pub totals: CheckoutTotals,
    pub payment_type: PaymentType,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn towel_line(qty: i64) -> CartLine {
        CartLine::new(Product::new("1", "Hair Towel", 11500, 100, "Cloth"), qty)
    }

    fn adjustments(received: i64) -> Adjustments {
        Adjustments {
            vat: TaxRate::from_percent(10),
            discount: Money::from_cents(2000),
            shipping: Money::from_cents(500),
            received: Money::from_cents(received),
        }
    }

    #[test]
    fn test_reference_totals() {
        let totals = calculate(&[towel_line(2)], &adjustments(0));

        assert_eq!(totals.sub_total.cents(), 23000);
        assert_eq!(totals.vat_amount.cents(), 2300);
        assert_eq!(totals.total_amount.cents(), 23800);
    }

    #[test]
    fn test_underpayment_shows_due() {
        let totals = calculate(&[towel_line(2)], &adjustments(20000));
        assert_eq!(totals.change_amount, Money::zero());
        assert_eq!(totals.due_amount.cents(), 3800);
    }

    #[test]
    fn test_overpayment_shows_change() {
        let totals = calculate(&[towel_line(2)], &adjustments(30000));
        assert_eq!(totals.change_amount.cents(), 6200);
        assert_eq!(totals.due_amount, Money::zero());
    }

    #[test]
    fn test_exact_payment() {
        let totals = calculate(&[towel_line(2)], &adjustments(23800));
        assert!(totals.change_amount.is_zero());
        assert!(totals.due_amount.is_zero());
    }

    #[test]
    fn test_empty_cart_is_shipping_minus_discount() {
        let totals = calculate(&[], &adjustments(0));
        assert!(totals.sub_total.is_zero());
        assert_eq!(totals.total_amount.cents(), -1500);
        assert_eq!(totals.due_amount, Money::zero());
    }

    #[test]
    fn test_many_small_lines_do_not_drift() {
        let bread = Product::new("6", "Bread", 120, 150, "Bakery");
        let coke = Product::new("5", "Coca Cola", 250, 200, "Beverages");
        let lines = vec![CartLine::new(bread, 7), CartLine::new(coke, 3)];

        let totals = calculate(&lines, &Adjustments::default());
        assert_eq!(totals.sub_total.cents(), 840 + 750);
        assert_eq!(totals.total_amount, totals.sub_total);
    }

    #[test]
    fn test_adjustments_validate() {
        assert!(adjustments(20000).validate().is_ok());

        let huge_shipping = Adjustments {
            shipping: Money::from_cents(i64::MAX),
            ..Default::default()
        };
        assert!(huge_shipping.validate().is_err());

        let vat_over_100 = Adjustments {
            vat: TaxRate::from_bps(10001),
            ..Default::default()
        };
        assert!(vat_over_100.validate().is_err());
    }

    #[test]
    fn test_materialize_sale_freezes_lines() {
        let lines = vec![towel_line(2)];
        let totals = calculate(&lines, &adjustments(0));
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        let sale = materialize_sale("S-1", date, "John Doe", &lines, &totals);

        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.total_cents, 23800);
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].price_cents, 11500);
        assert_eq!(sale.items[0].total_cents, 23000);
        assert_eq!(sale.items_total().cents(), 23000);
    }

    #[test]
    fn test_payment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentType::MobileBanking).unwrap(),
            "\"Mobile Banking\""
        );
        assert_eq!(PaymentType::default(), PaymentType::Cash);
    }
}
