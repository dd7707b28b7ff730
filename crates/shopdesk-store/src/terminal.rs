//! # Terminal
//!
//! Barcode lookup and checkout for the POS screen.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout                                             │
//! │                                                                         │
//! │  cart ──► calculate(lines, adjustments) ──► CheckoutTotals              │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │              materialize_sale("S-<uuid>", today, customer)              │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                  add_sale ──► clear_cart ──► CheckoutReceipt            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use shopdesk_core::checkout::{
    calculate, materialize_sale, Adjustments, CheckoutReceipt, CheckoutTotals, PaymentType,
};
use shopdesk_core::{CoreError, CoreResult, Product, WALK_IN_CUSTOMER};

use crate::store::Store;

/// Everything the terminal collects besides the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CheckoutRequest {
    /// Customer name. Blank or missing means walk-in.
    pub customer: Option<String>,
    pub adjustments: Adjustments,
    pub payment_type: PaymentType,
    pub note: Option<String>,
    /// Sale date. Defaults to today (UTC).
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
}

/// Generates a sale id.
fn sale_id() -> String {
    format!("S-{}", Uuid::new_v4().simple())
}

impl Store {
    /// Finds a product by barcode, falling back to id.
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.products
            .iter()
            .find(|p| p.matches_code(code))
    }

    /// Adds one unit of the product matching `code` to the cart.
    pub fn scan(&mut self, code: &str) -> CoreResult<Product> {
        let Some(product) = self.find_by_code(code).cloned() else {
            warn!(code = %code, "Scanned code matches no product");
            return Err(CoreError::not_found("Product", code.trim()));
        };

        self.add_to_cart(&product, 1)?;
        Ok(product)
    }

    /// Live totals for the current cart.
    pub fn totals(&self, adjustments: &Adjustments) -> CheckoutTotals {
        calculate(self.cart.lines(), adjustments)
    }

    /// Records the cart as a completed sale and empties the cart.
    ///
    /// On error neither the sales list nor the cart changes.
    pub fn checkout(&mut self, request: CheckoutRequest) -> CoreResult<CheckoutReceipt> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        request.adjustments.validate()?;

        let totals = self.totals(&request.adjustments);
        let customer = request
            .customer
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| WALK_IN_CUSTOMER.to_string());
        let date = request.date.unwrap_or_else(|| Utc::now().date_naive());

        let sale = materialize_sale(sale_id(), date, customer, self.cart.lines(), &totals);
        self.add_sale(sale.clone())?;
        self.clear_cart();

        info!(
            sale_id = %sale.id,
            customer = %sale.customer,
            items = sale.items.len(),
            total = %totals.total_amount,
            payment = ?request.payment_type,
            "Sale recorded"
        );

        Ok(CheckoutReceipt {
            sale,
            totals,
            payment_type: request.payment_type,
            note: request.note.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::{Money, SaleStatus, TaxRate};

    fn store() -> Store {
        let mut store = Store::new();
        store
            .add_product(
                Product::new("1", "Hair Towel", 11500, 100, "Cloth").with_barcode("1234567890123"),
            )
            .unwrap();
        store
            .add_product(Product::new("2", "Bread", 120, 150, "Bakery"))
            .unwrap();
        store
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
    fn test_scan_by_barcode_and_id() {
        let mut store = store();

        assert_eq!(store.scan("1234567890123").unwrap().id, "1");
        assert_eq!(store.scan(" 2 ").unwrap().name, "Bread");
        store.scan("1234567890123").unwrap();

        let cart = store.cart();
        assert_eq!(cart.line("1").unwrap().quantity, 2);
        assert_eq!(cart.line("2").unwrap().quantity, 1);
    }

    #[test]
    fn test_scan_unknown_code() {
        let mut store = store();

        assert_eq!(
            store.scan("0000000000000"),
            Err(CoreError::not_found("Product", "0000000000000"))
        );
        assert!(store.find_by_code("   ").is_none());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_checkout_records_sale_and_clears_cart() {
        let mut store = store();
        let towel = store.product("1").unwrap().clone();
        store.add_to_cart(&towel, 2).unwrap();

        let receipt = store
            .checkout(CheckoutRequest {
                customer: Some("John Doe".to_string()),
                adjustments: adjustments(20000),
                payment_type: PaymentType::Card,
                note: Some("gift wrap".to_string()),
                date: NaiveDate::from_ymd_opt(2024, 1, 10),
            })
            .unwrap();

        assert_eq!(receipt.totals.total_amount.cents(), 23800);
        assert_eq!(receipt.totals.due_amount.cents(), 3800);
        assert_eq!(receipt.payment_type, PaymentType::Card);
        assert_eq!(receipt.note.as_deref(), Some("gift wrap"));

        let sale = &receipt.sale;
        assert!(sale.id.starts_with("S-"));
        assert_eq!(sale.customer, "John Doe");
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.total_cents, 23800);
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].total_cents, 23000);

        assert_eq!(store.sales().as_slice(), &[receipt.sale.clone()]);
        assert!(store.cart().is_empty());
        // Stock is not decremented.
        assert_eq!(store.product("1").unwrap().stock, 100);
    }

    #[test]
    fn test_checkout_defaults_to_walk_in() {
        let mut store = store();
        store.scan("2").unwrap();

        let receipt = store
            .checkout(CheckoutRequest {
                customer: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(receipt.sale.customer, WALK_IN_CUSTOMER);
        assert_eq!(receipt.sale.total_cents, 120);
        assert_eq!(receipt.payment_type, PaymentType::Cash);
        assert_eq!(receipt.sale.date, Utc::now().date_naive());
    }

    #[test]
    fn test_checkout_empty_cart_changes_nothing() {
        let mut store = store();
        let sales_before = store.sales();

        assert_eq!(
            store.checkout(CheckoutRequest::default()),
            Err(CoreError::EmptyCart)
        );
        assert!(std::sync::Arc::ptr_eq(&sales_before, &store.sales()));
    }

    #[test]
    fn test_checkout_rejects_out_of_range_adjustments() {
        let mut store = store();
        store.scan("1234567890123").unwrap();
        let sales_before = store.sales();
        let cart_before = store.cart();

        let request = CheckoutRequest {
            adjustments: Adjustments {
                shipping: Money::from_cents(i64::MAX),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            store.checkout(request),
            Err(CoreError::Validation(_))
        ));
        assert!(std::sync::Arc::ptr_eq(&sales_before, &store.sales()));
        assert!(std::sync::Arc::ptr_eq(&cart_before, &store.cart()));
    }

    #[test]
    fn test_consecutive_checkouts_get_distinct_ids() {
        let mut store = store();

        store.scan("1").unwrap();
        let first = store.checkout(CheckoutRequest::default()).unwrap();
        store.scan("1").unwrap();
        let second = store.checkout(CheckoutRequest::default()).unwrap();

        assert_ne!(first.sale.id, second.sale.id);
        assert_eq!(store.sales().len(), 2);
    }

    #[test]
    fn test_totals_track_cart() {
        let mut store = store();
        assert_eq!(store.totals(&Adjustments::default()).total_amount, Money::zero());

        store.scan("1").unwrap();
        store.scan("1").unwrap();
        assert_eq!(store.totals(&adjustments(0)).sub_total.cents(), 23000);
    }
}
