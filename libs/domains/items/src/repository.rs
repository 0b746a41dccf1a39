use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};

/// Repository trait for Item storage
///
/// This trait defines the storage interface for items. The default
/// implementation is in-memory; alternative backends only need to honor the
/// same id and ordering guarantees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by id
    async fn get(&self, id: u64) -> ItemResult<Option<Item>>;

    /// Create a new item with the next id from the counter
    async fn create(&self, payload: ItemPayload) -> ItemResult<Item>;

    /// Replace the mutable fields of an existing item in place
    async fn update(&self, id: u64, payload: ItemPayload) -> ItemResult<Option<Item>>;

    /// Remove an item, returning the removed snapshot
    async fn delete(&self, id: u64) -> ItemResult<Option<Item>>;
}
