use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartByIdUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartByIdUseCase for GetCartByIdUseCaseImpl {
    async fn execute(&self, params: GetCartByIdParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart by id: {}", params.id));

        let cart = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::Item;
    use crate::domain::shared::value_objects::CartId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn create(&self) -> Result<Cart, RepositoryError>;
            async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError>;
            async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_cart_when_found() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Cart::new(id)));

        let use_case = GetCartByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartByIdParams { id: CartId::new(3) })
            .await
            .unwrap();

        assert_eq!(cart.id, CartId::new(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_does_not_exist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCartByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartByIdParams { id: CartId::new(3) })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
