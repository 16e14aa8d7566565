// Common test utilities for integration tests

use std::sync::Arc;

use poem::{test::TestClient, Endpoint, Route};
use poem_openapi::OpenApiService;

use catalog_backend::api::{HealthApi, ItemsApi};
use catalog_backend::app_data::AppData;
use catalog_backend::stores::ItemStore;

/// Builds the full application routes backed by a fresh in-memory store
///
/// Returns the test client together with a handle to the underlying store so
/// tests can seed or inspect the catalog without going through HTTP.
pub fn setup_test_app() -> (TestClient<impl Endpoint>, Arc<ItemStore>) {
    let app_data = AppData::init();
    let item_store = app_data.item_store.clone();

    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(item_store.clone())),
        "Item Catalog API",
        "1.0.0",
    );
    let app = Route::new().nest("/", api_service);

    (TestClient::new(app), item_store)
}

/// Seeds the store with `count` sequentially named items
pub fn seed_items(store: &ItemStore, count: usize) {
    for i in 0..count {
        store
            .create_item(format!("item-{}", i), None, 1.0 + i as f64)
            .expect("seed item should be valid");
    }
}
