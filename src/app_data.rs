use std::sync::Arc;

use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// All stores are created once in main.rs and shared by reference into the
/// API layer, keeping ownership of process-wide state explicit instead of
/// relying on ambient globals.
pub struct AppData {
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    pub fn init() -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new());
        tracing::debug!("Stores created");

        Self { item_store }
    }
}
