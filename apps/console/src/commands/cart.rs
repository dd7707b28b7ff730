//! # Cart Commands
//!
//! Commands behind the POS terminal's cart panel.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Payment  │────►│  Sale    │       │
//! │  │  Cart    │     │          │     │  Panel   │     │ Recorded │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                      checkout            │
//! │                   scan_barcode                     (sale.rs)           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopdesk_core::checkout::{calculate, Adjustments, CheckoutTotals};
use shopdesk_core::{Cart, CartLine};

use crate::error::ApiError;
use crate::state::StoreState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub totals: CheckoutTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, adjustments: &Adjustments) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            totals: calculate(cart.lines(), adjustments),
        }
    }
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse::new(cart, &Adjustments::default())
    }
}

/// Gets the cart with totals for the given payment-panel adjustments.
///
/// ## Returns
/// Current cart lines and the live calculator output
pub fn get_cart(store: &StoreState, adjustments: Adjustments) -> Result<CartResponse, ApiError> {
    debug!(?adjustments, "get_cart command");
    adjustments.validate()?;
    Ok(store.with_store(|s| CartResponse::new(&s.cart(), &adjustments)))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new line with the current price
///
/// ## Arguments
/// * `product_id` - Catalog product id
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    store: &StoreState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    store.with_store_mut(|s| -> Result<CartResponse, ApiError> {
        let product = s
            .product(product_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;
        s.add_to_cart(&product, quantity)?;
        Ok(CartResponse::from(s.cart().as_ref()))
    })
}

/// Adds one unit of the product whose barcode (or id) is `code`.
pub fn scan_barcode(store: &StoreState, code: &str) -> Result<CartResponse, ApiError> {
    debug!(code = %code, "scan_barcode command");

    store.with_store_mut(|s| -> Result<CartResponse, ApiError> {
        s.scan(code)?;
        Ok(CartResponse::from(s.cart().as_ref()))
    })
}

/// Sets a line's quantity. Zero or less removes the line.
pub fn update_cart_item(
    store: &StoreState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    store.with_store_mut(|s| -> Result<CartResponse, ApiError> {
        s.set_cart_quantity(product_id, quantity)?;
        Ok(CartResponse::from(s.cart().as_ref()))
    })
}

/// Removes a line. Removing a product that is not in the cart is a no-op.
pub fn remove_from_cart(store: &StoreState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.remove_from_cart(product_id);
        CartResponse::from(s.cart().as_ref())
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User cancels the sale
/// - After checkout (done by the store itself)
pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(s.cart().as_ref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopdesk_core::{Money, TaxRate};

    #[test]
    fn test_add_and_scan() {
        let store = StoreState::with_demo_data();

        add_to_cart(&store, "1", Some(2)).unwrap();
        let cart = scan_barcode(&store, "1234567890123").unwrap();

        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.totals.sub_total.cents(), 34500);
    }

    #[test]
    fn test_add_unknown_product() {
        let store = StoreState::with_demo_data();

        let err = add_to_cart(&store, "99", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");
    }

    #[test]
    fn test_add_zero_quantity() {
        let store = StoreState::with_demo_data();

        let err = add_to_cart(&store, "1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert!(get_cart(&store, Adjustments::default()).unwrap().lines.is_empty());
    }

    #[test]
    fn test_update_remove_clear() {
        let store = StoreState::with_demo_data();
        add_to_cart(&store, "5", None).unwrap();
        add_to_cart(&store, "6", None).unwrap();

        let cart = update_cart_item(&store, "5", 6).unwrap();
        assert_eq!(cart.total_quantity, 7);

        let cart = update_cart_item(&store, "5", 0).unwrap();
        assert_eq!(cart.item_count, 1);

        let cart = remove_from_cart(&store, "5");
        assert_eq!(cart.item_count, 1);

        assert_eq!(clear_cart(&store).item_count, 0);
    }

    #[test]
    fn test_get_cart_applies_adjustments() {
        let store = StoreState::with_demo_data();
        add_to_cart(&store, "1", Some(2)).unwrap();

        let cart = get_cart(
            &store,
            Adjustments {
                vat: TaxRate::from_percent(10),
                discount: Money::from_cents(2000),
                shipping: Money::from_cents(500),
                received: Money::from_cents(20000),
            },
        )
        .unwrap();

        assert_eq!(cart.totals.total_amount.cents(), 23800);
        assert_eq!(cart.totals.due_amount.cents(), 3800);
    }

    #[test]
    fn test_get_cart_rejects_negative_discount() {
        let store = StoreState::with_demo_data();

        let err = get_cart(
            &store,
            Adjustments {
                discount: Money::from_cents(-1),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
