//! # Product Commands
//!
//! Catalog management for the "Add Products" and "All Products" pages.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shopdesk_core::{Product, ProductPatch};

use crate::error::ApiError;
use crate::state::StoreState;

/// Fields from the "Add Products" form.
///
/// The form does not ask for an id. One is generated when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
    pub category: String,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl From<NewProduct> for Product {
    fn from(input: NewProduct) -> Self {
        let id = input
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
        let product = Product::new(id, input.name, input.price_cents, input.stock, input.category);
        match input.barcode.filter(|b| !b.is_empty()) {
            Some(barcode) => product.with_barcode(barcode),
            None => product,
        }
    }
}

/// Lists the catalog, optionally filtered.
///
/// ## Arguments
/// * `query` - Case-insensitive match on name, category, barcode or id
pub fn list_products(store: &StoreState, query: Option<&str>) -> Vec<Product> {
    debug!(query = ?query, "list_products command");

    let query = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);
    store.with_store(|s| {
        s.products()
            .iter()
            .filter(|p| match &query {
                None => true,
                Some(q) => {
                    p.name.to_lowercase().contains(q)
                        || p.category.to_lowercase().contains(q)
                        || p
                            .barcode
                            .as_deref()
                            .is_some_and(|b| b.to_lowercase().contains(q.as_str()))
                        || p.id.eq_ignore_ascii_case(q)
                }
            })
            .cloned()
            .collect()
    })
}

pub fn add_product(store: &StoreState, input: NewProduct) -> Result<Product, ApiError> {
    debug!(name = %input.name, "add_product command");
    let product = Product::from(input);
    store.with_store_mut(|s| s.add_product(product.clone()))?;
    Ok(product)
}

pub fn update_product(
    store: &StoreState,
    id: &str,
    patch: ProductPatch,
) -> Result<Product, ApiError> {
    debug!(id = %id, "update_product command");
    Ok(store.with_store_mut(|s| s.update_product(id, patch))?)
}

pub fn delete_product(store: &StoreState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "delete_product command");
    Ok(store.with_store_mut(|s| s.delete_product(id))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn umbrella(id: Option<&str>) -> NewProduct {
        NewProduct {
            id: id.map(str::to_string),
            name: "Umbrella".to_string(),
            price_cents: 1500,
            stock: 20,
            category: "Accessories".to_string(),
            barcode: Some("7890123456789".to_string()),
        }
    }

    #[test]
    fn test_list_products_query() {
        let store = StoreState::with_demo_data();

        assert_eq!(list_products(&store, None).len(), 6);
        assert_eq!(list_products(&store, Some("  ")).len(), 6);

        let gadgets: Vec<_> = list_products(&store, Some("GADGETS"))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(gadgets, ["2", "4"]);

        let by_barcode = list_products(&store, Some("6789012345678"));
        assert_eq!(by_barcode.len(), 1);
        assert_eq!(by_barcode[0].name, "Bread");
    }

    #[test]
    fn test_list_products_matches_mixed_case_codes() {
        let store = StoreState::with_demo_data();
        let mut input = umbrella(Some("UMB-1"));
        input.barcode = Some("AB12cd".to_string());
        add_product(&store, input).unwrap();

        for query in ["AB12cd", "ab12CD", "B12C", "umb-1", "UMB-1"] {
            let found = list_products(&store, Some(query));
            assert_eq!(found.len(), 1, "query {query}");
            assert_eq!(found[0].id, "UMB-1");
        }
    }

    #[test]
    fn test_add_product_generates_id() {
        let store = StoreState::with_demo_data();

        let product = add_product(&store, umbrella(None)).unwrap();

        assert!(!product.id.is_empty());
        assert_eq!(product.barcode.as_deref(), Some("7890123456789"));
        assert_eq!(list_products(&store, None).len(), 7);
    }

    #[test]
    fn test_add_product_duplicate_id() {
        let store = StoreState::with_demo_data();

        let err = add_product(&store, umbrella(Some("1"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);
    }

    #[test]
    fn test_update_and_delete() {
        let store = StoreState::with_demo_data();

        let updated = update_product(
            &store,
            "6",
            ProductPatch {
                stock: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.stock, 5);

        let removed = delete_product(&store, "6").unwrap();
        assert_eq!(removed.name, "Bread");

        let err = delete_product(&store, "6").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
