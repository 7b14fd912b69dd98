use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

/// Raw list query; validated by the use case before the store is read.
pub struct GetAllItemsParams {
    pub offset: i64,
    pub limit: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// When `true`, soft-deleted items are included in the result.
    pub show_deleted: bool,
}

impl Default for GetAllItemsParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            min_price: None,
            max_price: None,
            show_deleted: false,
        }
    }
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
