use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Creating item: {}", params.name));

        let draft = NewItem::new(params.name, params.price).inspect_err(|e| {
            self.logger.warn(&format!("Rejected item creation: {}", e));
        })?;

        let item = self.repository.create(draft).await?;

        self.logger.info(&format!("Item created: {}", item.id));
        Ok(item)
    }
}
