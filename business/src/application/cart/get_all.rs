use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use crate::domain::errors::ValidationError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{Bounds, Pagination};

pub struct GetAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartsUseCase for GetAllCartsUseCaseImpl {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError> {
        self.logger.info(&format!(
            "Listing carts: offset={} limit={}",
            params.offset, params.limit
        ));

        let pagination = Pagination::new(params.offset, params.limit)?;
        let price = Bounds::non_negative(params.min_price, params.max_price)
            .ok_or(ValidationError::NegativePriceBound)?;
        let quantity = Bounds::non_negative(params.min_quantity, params.max_quantity)
            .ok_or(ValidationError::NegativeQuantityBound)?;

        let carts = self.repository.get_all().await?;

        // Page first, then filter the page.
        let page = pagination
            .apply(carts)
            .into_iter()
            .filter(|cart| price.contains(cart.total_price()))
            .filter(|cart| quantity.contains(cart.total_quantity()))
            .collect();

        Ok(page)
    }
}
