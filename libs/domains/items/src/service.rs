//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer validates payloads, maps missing ids to typed
/// not-found errors, and orchestrates repository operations.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all items in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Get an item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .get(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item
    #[instrument(skip(self, payload), fields(item_name = %payload.name))]
    pub async fn create_item(&self, payload: ItemPayload) -> ItemResult<Item> {
        payload
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(payload).await
    }

    /// Update an existing item, replacing all mutable fields
    #[instrument(skip(self, payload), fields(item_name = %payload.name))]
    pub async fn update_item(&self, id: u64, payload: ItemPayload) -> ItemResult<Item> {
        payload
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository
            .update(id, payload)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Delete an item, returning the removed snapshot
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
