use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{CartId, ItemId};

pub struct AddItemToCartParams {
    pub cart_id: CartId,
    pub item_id: ItemId,
}

#[async_trait]
pub trait AddItemToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError>;
}
