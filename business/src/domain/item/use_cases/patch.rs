use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemPatch};
use crate::domain::shared::value_objects::ItemId;

pub struct PatchItemParams {
    pub id: ItemId,
    pub patch: ItemPatch,
}

#[async_trait]
pub trait PatchItemUseCase: Send + Sync {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError>;
}
