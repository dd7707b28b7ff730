//! # Navigation Commands
//!
//! The sidebar's current page lives in the store so every view agrees on it.

use tracing::debug;

use shopdesk_core::{CoreError, Page};

use crate::error::ApiError;
use crate::state::StoreState;

/// Switches to the page with the given sidebar title (case-insensitive).
pub fn navigate(store: &StoreState, page: &str) -> Result<Page, ApiError> {
    debug!(page = %page, "navigate command");
    let page: Page = page.parse().map_err(CoreError::from)?;
    store.with_store_mut(|s| s.set_current_page(page));
    Ok(page)
}

pub fn current_page(store: &StoreState) -> Page {
    store.with_store(|s| s.current_page())
}
