use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

/// Raw list query over cart totals.
///
/// The page is cut from the full cart sequence first and the bounds filter
/// that page, so fewer than `limit` carts may come back even when more
/// matching carts exist further on.
pub struct GetAllCartsParams {
    pub offset: i64,
    pub limit: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

impl Default for GetAllCartsParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            min_price: None,
            max_price: None,
            min_quantity: None,
            max_quantity: None,
        }
    }
}

#[async_trait]
pub trait GetAllCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError>;
}
