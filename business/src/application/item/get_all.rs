use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ValidationError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{Bounds, Pagination};

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        self.logger.info(&format!(
            "Listing items: offset={} limit={} show_deleted={}",
            params.offset, params.limit, params.show_deleted
        ));

        let pagination = Pagination::new(params.offset, params.limit)?;
        let price = Bounds::non_negative(params.min_price, params.max_price)
            .ok_or(ValidationError::NegativePriceBound)?;

        let items = self.repository.get_all().await?;

        // Filter first, then cut the page out of the matching items.
        let matching = items
            .into_iter()
            .filter(|item| price.contains(item.price))
            .filter(|item| params.show_deleted || item.is_visible());

        Ok(pagination.apply(matching))
    }
}
