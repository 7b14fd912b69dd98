use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemChange};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use crate::domain::logger::Logger;

pub struct ReplaceItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceItemUseCase for ReplaceItemUseCaseImpl {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Replacing item: {}", params.id));

        let change = ItemChange::replace(params.name, params.price)?;

        let updated = self
            .repository
            .update(params.id, change)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        self.logger.info(&format!("Item replaced: {}", updated.id));
        Ok(updated)
    }
}
