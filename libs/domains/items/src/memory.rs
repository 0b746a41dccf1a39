//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;

/// Store contents: the ordered collection plus the id counter.
///
/// Ids are assigned from `next_id` and never reused; deleting an item does
/// not renumber the rest.
struct StoreInner {
    items: Vec<Item>,
    next_id: u64,
}

/// In-memory implementation of the ItemRepository.
///
/// State lives behind a single mutex, so concurrent handler invocations are
/// serialized. Everything resets when the process restarts: items empty,
/// counter back to 1.
pub struct InMemoryItemRepository {
    inner: Mutex<StoreInner>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let inner = self.inner.lock().await;
        Ok(inner.items.clone())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: u64) -> ItemResult<Option<Item>> {
        let inner = self.inner.lock().await;
        Ok(inner.items.iter().find(|item| item.id == id).cloned())
    }

    #[instrument(skip(self, payload), fields(item_name = %payload.name))]
    async fn create(&self, payload: ItemPayload) -> ItemResult<Item> {
        let mut inner = self.inner.lock().await;

        let item = Item::new(inner.next_id, payload);
        inner.next_id += 1;
        inner.items.push(item.clone());

        tracing::info!(item_id = item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self, payload), fields(item_name = %payload.name))]
    async fn update(&self, id: u64, payload: ItemPayload) -> ItemResult<Option<Item>> {
        let mut inner = self.inner.lock().await;

        let Some(item) = inner.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.apply(payload);

        tracing::info!(item_id = id, "Item updated successfully");
        Ok(Some(item.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> ItemResult<Option<Item>> {
        let mut inner = self.inner.lock().await;

        let Some(position) = inner.items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };
        let removed = inner.items.remove(position);

        tracing::info!(item_id = id, "Item deleted successfully");
        Ok(Some(removed))
    }
}
