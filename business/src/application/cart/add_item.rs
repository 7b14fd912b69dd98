use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;

/// Adds items from the item store to carts.
///
/// The item is read first and the cart is updated afterwards, so the two
/// stores are never locked at the same time.
pub struct AddItemToCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item_id, params.cart_id
        ));

        self.cart_repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        let item = self
            .item_repository
            .get_by_id(params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        if !item.is_visible() {
            self.logger
                .warn(&format!("Item {} is deleted, not added", item.id));
            return Err(CartError::ItemNotFound);
        }

        let cart = self
            .cart_repository
            .add_item(params.cart_id, &item)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Cart {} now holds {} units, total {}",
            cart.id,
            cart.total_quantity(),
            cart.total_price()
        ));
        Ok(cart)
    }
}
