use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request model for creating a new item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item, must be greater than zero
    pub price: f64,
}

/// Response model representing an item
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: Uuid,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: DateTime<Utc>,
}
