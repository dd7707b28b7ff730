//! # Purchase Commands

use tracing::debug;

use shopdesk_core::Purchase;
use shopdesk_store::NewPurchase;

use crate::error::ApiError;
use crate::state::StoreState;

/// Records a purchase from the "New Purchase" form.
pub fn create_purchase(store: &StoreState, request: NewPurchase) -> Result<Purchase, ApiError> {
    debug!(supplier_id = %request.supplier_id, items = request.items.len(), "create_purchase command");
    Ok(store.with_store_mut(|s| s.create_purchase(request))?)
}

pub fn list_purchases(store: &StoreState) -> Vec<Purchase> {
    debug!("list_purchases command");
    store.with_store(|s| s.purchases().to_vec())
}
