use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct CreateItemParams {
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
