//! # shopdesk-core: Pure Business Logic for Shopdesk POS
//!
//! This crate holds the domain types and the checkout math for the store
//! dashboard. Everything here is a pure function or a plain value type.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopdesk POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (TypeScript)                       │   │
//! │  │    POS Terminal ──► Sales ──► Purchases ──► Suppliers ──► ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Console Commands                             │   │
//! │  │    add_to_cart, scan_barcode, checkout, create_purchase, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopdesk-store (Store)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐          │   │
//! │  │   │  types  │  │  money  │  │  cart   │  │ checkout │          │   │
//! │  │   │ Product │  │  Money  │  │CartLine │  │ Totals   │          │   │
//! │  │   │  Sale   │  │ TaxRate │  │         │  │ Receipt  │          │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Product, Sale, Purchase, Supplier, Customer)
//! - [`money`] - Money and TaxRate with integer arithmetic
//! - [`cart`] - The active cart and its lines
//! - [`checkout`] - Checkout calculator and sale materialization
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopdesk_core::checkout::{calculate, Adjustments};
//! use shopdesk_core::{CartLine, Money, Product, TaxRate};
//!
//! let towel = Product::new("1", "Hair Towel", 11500, 100, "Cloth");
//! let lines = vec![CartLine::new(towel, 2)];
//!
//! let totals = calculate(
//!     &lines,
//!     &Adjustments {
//!         vat: TaxRate::from_percent(10),
//!         discount: Money::from_cents(2000),
//!         shipping: Money::from_cents(500),
//!         received: Money::zero(),
//!     },
//! );
//!
//! assert_eq!(totals.total_amount.cents(), 23800);
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use types::*;

/// Customer name recorded on a sale when the cashier picks nobody.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Products at or below this stock level are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Largest quantity a single cart or purchase line may hold.
///
/// Catches a mistyped quantity (1000 instead of 10) at the terminal.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Largest stock level a product may record.
pub const MAX_STOCK: i64 = 1_000_000;

/// Largest single money amount accepted as input (prices, costs,
/// discount, shipping, tendered): $10,000,000.00.
///
/// With [`MAX_ITEM_QUANTITY`] and [`MAX_STOCK`] this keeps line totals and
/// report sums far inside `i64` cents.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000;

/// VAT choices offered by the POS terminal, in whole percent.
///
/// The calculator itself accepts any non-negative rate.
pub const VAT_PERCENT_OPTIONS: [u32; 4] = [0, 5, 10, 15];
