//! # State Module
//!
//! Application state shared by all commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────────────┐                          │
//! │          ▼                                  ▼                           │
//! │  ┌──────────────────┐              ┌──────────────────┐                │
//! │  │   StoreState     │              │   ConfigState    │                │
//! │  │                  │              │                  │                │
//! │  │  Arc<Mutex<      │              │  store_name      │                │
//! │  │    Store         │              │  vat_options     │                │
//! │  │  >>              │              │  currency        │                │
//! │  └──────────────────┘              └──────────────────┘                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one lock per command                                    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;
