use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemChange;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger
            .info(&format!("Soft-deleting item: {}", params.id));

        self.repository
            .update(params.id, ItemChange::MarkDeleted)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        self.logger
            .info(&format!("Item marked as deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{Item, NewItem};
    use crate::domain::shared::value_objects::ItemId;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn create(&self, draft: NewItem) -> Result<Item, RepositoryError>;
            async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn update(&self, id: ItemId, change: ItemChange) -> Result<Item, RepositoryError>;
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
    async fn should_mark_item_deleted() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .with(eq(ItemId::new(1)), eq(ItemChange::MarkDeleted))
            .times(1)
            .returning(|id, change| {
                let mut item = Item::create(id, NewItem::new("pen".to_string(), 1.5).unwrap());
                item.apply(change).unwrap();
                Ok(item)
            });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams { id: ItemId::new(1) })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_item_already_deleted() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_update().times(2).returning(|id, change| {
            let mut item = Item::create(id, NewItem::new("pen".to_string(), 1.5).unwrap());
            item.deleted = true;
            item.apply(change).unwrap();
            Ok(item)
        });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(DeleteItemParams { id: ItemId::new(1) })
            .await;
        let second = use_case
            .execute(DeleteItemParams { id: ItemId::new(1) })
            .await;

        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams { id: ItemId::new(5) })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
