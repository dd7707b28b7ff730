//! # Store State
//!
//! Shares one [`Store`] between commands.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`. Each command holds the lock for
//! one whole operation, so a command never observes another command's
//! half-applied change. Readers that want to keep a collection past the
//! lock clone its `Arc` snapshot out.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopdesk_store::Store;

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// A state pre-filled with the demo catalog.
    pub fn with_demo_data() -> Self {
        Self::new(Store::with_demo_data())
    }

    /// Store mutations either complete or leave state untouched, so a
    /// panic in another holder cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use shopdesk_console::state::StoreState;
    ///
    /// let state = StoreState::with_demo_data();
    /// let count = state.with_store(|s| s.products().len());
    /// assert_eq!(count, 6);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }
}
