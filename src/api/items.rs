use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::items::{CreateItemRequest, Item};

/// Items API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated ID
    /// and timestamp. Fails with 422 and field-level detail when the name
    /// length or price constraint is violated.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> Result<Json<Item>, ItemError> {
        let CreateItemRequest {
            name,
            description,
            price,
        } = body.0;

        let item = self.item_store.create_item(name, description, price)?;

        Ok(Json(item))
    }

    /// List items
    ///
    /// Returns a window of the catalog in insertion order. Defaults to the
    /// first 10 items; a window past the end of the catalog is empty.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        skip: Query<Option<u64>>,
        limit: Query<Option<u64>>,
    ) -> Json<Vec<Item>> {
        let skip = usize::try_from(skip.0.unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.0.unwrap_or(10)).unwrap_or(usize::MAX);

        Json(self.item_store.list_items(skip, limit))
    }
}
