//! # Sale Commands

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopdesk_core::checkout::CheckoutReceipt;
use shopdesk_core::Sale;
use shopdesk_store::CheckoutRequest;

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// Receipt shown after "Save" on the payment panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub store_name: String,
    pub receipt: CheckoutReceipt,
    pub formatted_total: String,
    pub formatted_change: String,
    pub formatted_due: String,
}

/// Records the cart as a completed sale.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Store::checkout                                                     │
/// │     - empty cart → EMPTY_CART, nothing recorded                         │
/// │     - bad adjustments → VALIDATION_ERROR, nothing recorded              │
/// │     - otherwise sale appended, cart cleared                             │
/// │  2. Format amounts with the configured currency                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn checkout(
    store: &StoreState,
    config: &ConfigState,
    request: CheckoutRequest,
) -> Result<ReceiptResponse, ApiError> {
    debug!(customer = ?request.customer, payment = ?request.payment_type, "checkout command");

    let receipt = store.with_store_mut(|s| s.checkout(request))?;
    let totals = receipt.totals;

    Ok(ReceiptResponse {
        store_name: config.store_name.clone(),
        formatted_total: config.format_currency(totals.total_amount.cents()),
        formatted_change: config.format_currency(totals.change_amount.cents()),
        formatted_due: config.format_currency(totals.due_amount.cents()),
        receipt,
    })
}

/// All recorded sales, oldest first.
pub fn list_sales(store: &StoreState) -> Vec<Sale> {
    debug!("list_sales command");
    store.with_store(|s| s.sales().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::error::ErrorCode;
    use shopdesk_core::checkout::{Adjustments, PaymentType};
    use shopdesk_core::{Money, TaxRate, WALK_IN_CUSTOMER};

    #[test]
    fn test_checkout() {
        let store = StoreState::with_demo_data();
        let config = ConfigState::default();
        add_to_cart(&store, "1", Some(2)).unwrap();

        let response = checkout(
            &store,
            &config,
            CheckoutRequest {
                adjustments: Adjustments {
                    vat: TaxRate::from_percent(10),
                    discount: Money::from_cents(2000),
                    shipping: Money::from_cents(500),
                    received: Money::from_cents(30000),
                },
                payment_type: PaymentType::MobileBanking,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(response.formatted_total, "$238.00");
        assert_eq!(response.formatted_change, "$62.00");
        assert_eq!(response.formatted_due, "$0.00");
        assert_eq!(response.receipt.sale.customer, WALK_IN_CUSTOMER);

        let sales = list_sales(&store);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[1].total_cents, 23800);
        assert!(get_cart(&store, Adjustments::default()).unwrap().lines.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let store = StoreState::with_demo_data();

        let err = checkout(&store, &ConfigState::default(), CheckoutRequest::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(list_sales(&store).len(), 1);
    }

    #[test]
    fn test_checkout_rejects_vat_over_100_percent() {
        let store = StoreState::with_demo_data();
        add_to_cart(&store, "1", None).unwrap();

        let request = CheckoutRequest {
            adjustments: Adjustments {
                vat: TaxRate::from_bps(10001),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = checkout(&store, &ConfigState::default(), request).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        // Cart survives a rejected checkout.
        assert_eq!(get_cart(&store, Adjustments::default()).unwrap().item_count, 1);
    }
}
