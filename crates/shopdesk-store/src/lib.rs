//! # shopdesk-store: In-Memory State for Shopdesk POS
//!
//! Owns every entity collection and the active cart. The dashboard reads and
//! writes exclusively through [`Store`].
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Snapshots                                      │
//! │                                                                         │
//! │  products ──► Arc<Vec<Product>>  ◄── reader A holds v1                  │
//! │                                                                         │
//! │  add_product(p)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products ──► Arc<Vec<Product>> (v2, new allocation)                    │
//! │                                                                         │
//! │  Reader A still sees v1 unchanged. `Arc::ptr_eq(v1, v2)` is false, so  │
//! │  a view can tell the collection changed without comparing contents.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`store`] - The `Store` type and entity/cart mutations
//! - [`terminal`] - Barcode scan and checkout
//! - [`purchase`] - Purchase creation with supplier/product binding
//! - [`reports`] - Dashboard and report aggregates
//! - [`seed`] - Demo data

pub mod purchase;
pub mod reports;
pub mod seed;
pub mod store;
pub mod terminal;

pub use purchase::{NewPurchase, NewPurchaseItem};
pub use reports::{DashboardSummary, ReportSummary};
pub use store::Store;
pub use terminal::CheckoutRequest;
