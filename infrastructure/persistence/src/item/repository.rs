use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{Item, ItemChange, NewItem};
use business::domain::item::repository::ItemRepository;
use business::domain::shared::value_objects::ItemId;

use crate::store::InMemoryStore;

/// Process-local item catalog. Items are never removed, only soft-deleted.
#[derive(Default)]
pub struct ItemRepositoryInMemory {
    store: InMemoryStore<Item>,
}

impl ItemRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryInMemory {
    async fn create(&self, draft: NewItem) -> Result<Item, RepositoryError> {
        let item = self
            .store
            .insert_with(|id| Item::create(ItemId::new(id), draft))?;
        tracing::debug!(item_id = %item.id, "item stored");
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        self.store.get(id.value())
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.store.all()
    }

    async fn update(&self, id: ItemId, change: ItemChange) -> Result<Item, RepositoryError> {
        let item = self.store.modify(id.value(), |item| {
            item.apply(change).map_err(|_| RepositoryError::Conflict)
        })?;
        tracing::debug!(item_id = %item.id, deleted = item.deleted, "item updated");
        Ok(item)
    }
}
