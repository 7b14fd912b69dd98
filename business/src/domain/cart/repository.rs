use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::CartId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stores an empty cart under the next identifier of the store.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
    /// Returns every cart in creation order.
    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
    /// Adds one unit of `item` to the cart as one atomic read-modify-write.
    async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError>;
}
