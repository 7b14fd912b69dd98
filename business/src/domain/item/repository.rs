use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ItemId;

use super::model::{Item, ItemChange, NewItem};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores `draft` under the next identifier of the store.
    async fn create(&self, draft: NewItem) -> Result<Item, RepositoryError>;
    /// Returns the stored item, soft-deleted or not.
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
    /// Returns every item in creation order.
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    /// Applies `change` as one atomic read-modify-write.
    ///
    /// Fails with `Conflict` when the item refuses the change.
    async fn update(&self, id: ItemId, change: ItemChange) -> Result<Item, RepositoryError>;
}
