//! Purchase creation from the "New Purchase" form.
//!
//! The form names a supplier and products by id. Both are resolved here so
//! the recorded purchase carries their names. Stock and supplier balance
//! are not adjusted.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use shopdesk_core::validation::{validate_amount_cents, validate_quantity};
use shopdesk_core::{
    CoreError, CoreResult, Money, Purchase, PurchaseItem, PurchaseStatus, ValidationError,
};

use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPurchaseItem {
    pub product_id: String,
    pub quantity: i64,
    /// Unit cost paid to the supplier, in cents.
    pub cost_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPurchase {
    pub supplier_id: String,
    pub items: Vec<NewPurchaseItem>,
    #[serde(default)]
    pub status: PurchaseStatus,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
}

impl Store {
    /// Builds and records a purchase. Returns the stored record.
    pub fn create_purchase(&mut self, request: NewPurchase) -> CoreResult<Purchase> {
        let supplier = self
            .supplier(&request.supplier_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| CoreError::not_found("Supplier", &request.supplier_id))?;

        if request.items.is_empty() {
            return Err(ValidationError::Required {
                field: "items".to_string(),
            }
            .into());
        }

        let items = request
            .items
            .iter()
            .map(|item| -> CoreResult<PurchaseItem> {
                validate_quantity(item.quantity)?;
                validate_amount_cents("cost", item.cost_cents)?;
                let product = self
                    .product(&item.product_id)
                    .ok_or_else(|| CoreError::not_found("Product", &item.product_id))?;
                Ok(PurchaseItem::snapshot(
                    product,
                    item.quantity,
                    Money::from_cents(item.cost_cents),
                ))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let total: Money = items.iter().map(PurchaseItem::total).sum();
        let purchase = Purchase {
            id: format!("P-{}", Uuid::new_v4().simple()),
            date: request.date.unwrap_or_else(|| Utc::now().date_naive()),
            supplier,
            items,
            total_cents: total.cents(),
            status: request.status,
        };

        self.add_purchase(purchase.clone())?;
        info!(
            purchase_id = %purchase.id,
            supplier = %purchase.supplier,
            total = %total,
            "Purchase recorded"
        );
        Ok(purchase)
    }
}
