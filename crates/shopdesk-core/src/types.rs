//! # Domain Types
//!
//! Core domain types used throughout Shopdesk POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Purchase     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id, date       │   │  id, date       │       │
//! │  │  name, category │   │  customer (snap)│   │  supplier (snap)│       │
//! │  │  price_cents    │   │  items[]        │   │  items[]        │       │
//! │  │  stock, barcode │   │  total_cents    │   │  total_cents    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Supplier     │   │    Customer     │   │      Page       │       │
//! │  │  balance_cents  │   │  due_amount     │   │  active view    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sale and purchase items copy the product name and price at transaction
//! time. Editing or deleting the product later never changes history.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,

    /// Display name shown to cashier and on the sales list.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Units on hand. Sales do not decrement this.
    pub stock: i64,

    pub category: String,

    /// Barcode (EAN-13 in the demo data). Expected unique, not enforced.
    pub barcode: Option<String>,
}

impl Product {
    /// Creates a product without a barcode.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            stock,
            category: category.into(),
            barcode: None,
        }
    }

    /// Sets the barcode.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// True when `code` is this product's barcode or its id.
    pub fn matches_code(&self, code: &str) -> bool {
        self.barcode.as_deref() == Some(code) || self.id == code
    }

    /// Merges the present fields of `patch` into this product.
    ///
    /// An empty `barcode` in the patch clears the barcode.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(barcode) = patch.barcode {
            self.barcode = if barcode.is_empty() { None } else { Some(barcode) };
        }
    }
}

/// Partial product update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub barcode: Option<String>,
}

// =============================================================================
// Customer & Supplier
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Outstanding amount owed by the customer. No operation changes it.
    pub due_amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    /// Phone number or contact person.
    pub contact: String,
    pub email: String,
    pub address: String,
    /// Amount owed to the supplier. Purchases do not change it.
    pub balance_cents: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// The status of a recorded sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    Completed,
    Pending,
    Returned,
}

/// A sale in the append-only sales history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Customer name at time of sale (not a reference).
    pub customer: String,
    pub items: Vec<SaleItem>,
    pub total_cents: i64,
    pub status: SaleStatus,
}

impl Sale {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Sum of the item totals, independent of VAT, discount and shipping.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(SaleItem::total).sum()
    }
}

/// A line in a recorded sale, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleItem {
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub price_cents: i64,
    /// price × quantity.
    pub total_cents: i64,
}

impl SaleItem {
    /// Freezes a product and quantity into a sale line.
    pub fn snapshot(product: &Product, quantity: i64) -> Self {
        SaleItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price_cents: product.price_cents,
            total_cents: product.price().multiply_quantity(quantity).cents(),
        }
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Purchase
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    #[default]
    Completed,
    Pending,
}

/// A stock purchase from a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Purchase {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Supplier name at time of purchase (not a reference).
    pub supplier: String,
    pub items: Vec<PurchaseItem>,
    /// Sum of item totals at creation time.
    pub total_cents: i64,
    pub status: PurchaseStatus,
}

impl Purchase {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseItem {
    pub product_id: String,
    /// Product name at time of purchase (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// Unit cost in cents.
    pub cost_cents: i64,
    /// cost × quantity.
    pub total_cents: i64,
}

impl PurchaseItem {
    pub fn snapshot(product: &Product, quantity: i64, cost: Money) -> Self {
        PurchaseItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            cost_cents: cost.cents(),
            total_cents: cost.multiply_quantity(quantity).cents(),
        }
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Page
// =============================================================================

/// The management view currently mounted by the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Page {
    #[default]
    Dashboard,
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "Sales List")]
    SalesList,
    #[serde(rename = "New Purchase")]
    NewPurchase,
    #[serde(rename = "Purchase List")]
    PurchaseList,
    #[serde(rename = "New Supplier")]
    NewSupplier,
    #[serde(rename = "Supplier List")]
    SupplierList,
    #[serde(rename = "Add Products")]
    AddProducts,
    #[serde(rename = "All Products")]
    AllProducts,
    Reports,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Dashboard,
        Page::Pos,
        Page::SalesList,
        Page::NewPurchase,
        Page::PurchaseList,
        Page::NewSupplier,
        Page::SupplierList,
        Page::AddProducts,
        Page::AllProducts,
        Page::Reports,
    ];

    /// Sidebar title of the page.
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Pos => "POS",
            Page::SalesList => "Sales List",
            Page::NewPurchase => "New Purchase",
            Page::PurchaseList => "Purchase List",
            Page::NewSupplier => "New Supplier",
            Page::SupplierList => "Supplier List",
            Page::AddProducts => "Add Products",
            Page::AllProducts => "All Products",
            Page::Reports => "Reports",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "page".to_string(),
                allowed: Page::ALL.iter().map(|p| p.title().to_string()).collect(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
