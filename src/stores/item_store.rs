use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::errors::internal::ValidationError;
use crate::types::dto::items::Item;

/// Maximum accepted item name length, in characters
const NAME_MAX_LENGTH: usize = 100;

/// ItemStore manages the in-memory item catalog
///
/// The catalog is an append-only sequence: items are validated and stamped
/// with identity and creation time on insert, never mutated afterwards, and
/// never removed for the lifetime of the process. Reads and appends may
/// interleave from concurrent request handlers; the sequence is guarded by
/// an RwLock so every append is observed as a single step.
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Create an empty item store
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Validate caller-supplied item data
    ///
    /// Checks run in order and stop at the first violation. Name length is
    /// counted in characters, not bytes. A NaN price fails the positivity
    /// check.
    fn validate(name: &str, price: f64) -> Result<(), ValidationError> {
        let length = name.chars().count();
        if length == 0 || length > NAME_MAX_LENGTH {
            return Err(ValidationError::NameLength { length });
        }

        if !(price > 0.0) {
            return Err(ValidationError::NonPositivePrice { price });
        }

        Ok(())
    }

    /// Create a new item and append it to the catalog
    ///
    /// Assigns a fresh random identifier and the current wall-clock time,
    /// then appends the item in a single step under the write lock. A
    /// validation failure leaves the catalog untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `name` is empty or longer than 100
    /// characters, or when `price` is not strictly positive.
    pub fn create_item(
        &self,
        name: String,
        description: Option<String>,
        price: f64,
    ) -> Result<Item, ValidationError> {
        Self::validate(&name, price)?;

        let mut items = self
            .items
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Stamped under the write lock so created_at never decreases in
        // insertion order across concurrent appends.
        let item = Item {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            created_at: Utc::now(),
        };
        items.push(item.clone());
        drop(items);

        tracing::debug!(item_id = %item.id, "item created");

        Ok(item)
    }

    /// List a contiguous window of the catalog in insertion order
    ///
    /// Returns at most `limit` items starting at offset `skip`. A window
    /// past the end of the catalog yields an empty list rather than an
    /// error; a window overlapping the end yields the available tail.
    pub fn list_items(&self, skip: usize, limit: usize) -> Vec<Item> {
        let items = self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        items.iter().skip(skip).take(limit).cloned().collect()
    }

    /// Number of items currently in the catalog
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
