//! # Commands Module
//!
//! All commands exposed to the dashboard.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports, dispatch)
//! ├── cart.rs        ◄─── Cart manipulation, barcode scan
//! ├── sale.rs        ◄─── Checkout, sales list
//! ├── product.rs     ◄─── Catalog CRUD
//! ├── purchase.rs    ◄─── Purchase entry and list
//! ├── party.rs       ◄─── Suppliers and customers
//! ├── report.rs      ◄─── Dashboard and reports
//! ├── config.rs      ◄─── Configuration retrieval
//! └── navigation.rs  ◄─── Current page
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  add_to_cart {"product_id": "1", "quantity": 2}                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  invoke(store, config, "add_to_cart", args)                             │
//! │         │  args decoded into the command's parameters                   │
//! │         ▼                                                               │
//! │  cart::add_to_cart(store, "1", Some(2)) -> Result<CartResponse, ApiError>│
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  { "lines": [...], "itemCount": 1, "totals": {...} }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands whose only parameter is a record (`add_product`, `checkout`,
//! `create_purchase`, ...) take that record as the whole argument object.

pub mod cart;
pub mod config;
pub mod navigation;
pub mod party;
pub mod product;
pub mod purchase;
pub mod report;
pub mod sale;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopdesk_core::checkout::Adjustments;
use shopdesk_core::ProductPatch;

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// Every command name `invoke` understands.
pub const COMMANDS: &[&str] = &[
    "get_cart",
    "add_to_cart",
    "scan_barcode",
    "update_cart_item",
    "remove_from_cart",
    "clear_cart",
    "checkout",
    "list_products",
    "add_product",
    "update_product",
    "delete_product",
    "list_sales",
    "create_purchase",
    "list_purchases",
    "add_supplier",
    "list_suppliers",
    "add_customer",
    "list_customers",
    "get_dashboard",
    "get_report",
    "get_config",
    "navigate",
    "current_page",
];

#[derive(Deserialize)]
struct ProductIdArgs {
    product_id: String,
}

#[derive(Deserialize)]
struct AddToCartArgs {
    product_id: String,
    quantity: Option<i64>,
}

#[derive(Deserialize)]
struct UpdateCartItemArgs {
    product_id: String,
    quantity: i64,
}

#[derive(Deserialize)]
struct ScanArgs {
    code: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct QueryArgs {
    query: Option<String>,
}

#[derive(Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Deserialize)]
struct UpdateProductArgs {
    id: String,
    patch: ProductPatch,
}

#[derive(Deserialize)]
struct NavigateArgs {
    page: String,
}

/// Decodes `args`, treating a missing argument object as `{}`.
fn args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(args)?)
}

fn respond<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response).map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs the named command with JSON arguments and returns its JSON response.
pub fn invoke(
    store: &StoreState,
    config: &ConfigState,
    command: &str,
    raw: Value,
) -> Result<Value, ApiError> {
    match command {
        // Cart
        "get_cart" => {
            let adjustments: Adjustments = args(raw)?;
            respond(cart::get_cart(store, adjustments)?)
        }
        "add_to_cart" => {
            let a: AddToCartArgs = args(raw)?;
            respond(cart::add_to_cart(store, &a.product_id, a.quantity)?)
        }
        "scan_barcode" => {
            let a: ScanArgs = args(raw)?;
            respond(cart::scan_barcode(store, &a.code)?)
        }
        "update_cart_item" => {
            let a: UpdateCartItemArgs = args(raw)?;
            respond(cart::update_cart_item(store, &a.product_id, a.quantity)?)
        }
        "remove_from_cart" => {
            let a: ProductIdArgs = args(raw)?;
            respond(cart::remove_from_cart(store, &a.product_id))
        }
        "clear_cart" => respond(cart::clear_cart(store)),

        // Sales
        "checkout" => respond(sale::checkout(store, config, args(raw)?)?),
        "list_sales" => respond(sale::list_sales(store)),

        // Products
        "list_products" => {
            let a: QueryArgs = args(raw)?;
            respond(product::list_products(store, a.query.as_deref()))
        }
        "add_product" => respond(product::add_product(store, args(raw)?)?),
        "update_product" => {
            let a: UpdateProductArgs = args(raw)?;
            respond(product::update_product(store, &a.id, a.patch)?)
        }
        "delete_product" => {
            let a: IdArgs = args(raw)?;
            respond(product::delete_product(store, &a.id)?)
        }

        // Purchases
        "create_purchase" => respond(purchase::create_purchase(store, args(raw)?)?),
        "list_purchases" => respond(purchase::list_purchases(store)),

        // Suppliers & customers
        "add_supplier" => respond(party::add_supplier(store, args(raw)?)?),
        "list_suppliers" => respond(party::list_suppliers(store)),
        "add_customer" => respond(party::add_customer(store, args(raw)?)?),
        "list_customers" => respond(party::list_customers(store)),

        // Reports
        "get_dashboard" => respond(report::get_dashboard(store, config)),
        "get_report" => respond(report::get_report(store, config)),

        // Config & navigation
        "get_config" => respond(config::get_config(config)),
        "navigate" => {
            let a: NavigateArgs = args(raw)?;
            respond(navigation::navigate(store, &a.page)?)
        }
        "current_page" => respond(navigation::current_page(store)),

        other => Err(ApiError::not_found("Command", other)),
    }
}
