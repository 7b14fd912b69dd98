use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemChange};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use crate::domain::logger::Logger;

pub struct PatchItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PatchItemUseCase for PatchItemUseCaseImpl {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Patching item: {}", params.id));

        let change = ItemChange::patch(params.patch)?;

        let updated = self
            .repository
            .update(params.id, change)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                RepositoryError::Conflict => ItemError::Deleted,
                other => ItemError::Repository(other),
            })
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Patch rejected for item {}: {}", params.id, e));
            })?;

        self.logger.info(&format!("Item patched: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{ItemPatch, NewItem};
    use crate::domain::shared::value_objects::ItemId;
    use mockall::mock;

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
    async fn should_apply_only_supplied_fields() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_update().times(1).returning(|id, change| {
            let mut item = Item::create(id, NewItem::new("pen".to_string(), 1.5).unwrap());
            item.apply(change).unwrap();
            Ok(item)
        });

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                patch: ItemPatch {
                    name: Some("gel pen".to_string()),
                    price: None,
                },
            })
            .await;

        let item = result.unwrap();
        assert_eq!(item.name, "gel pen");
        assert_eq!(item.price, 1.5);
    }

    #[tokio::test]
    async fn should_report_deleted_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::Conflict));

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                patch: ItemPatch {
                    name: None,
                    price: Some(3.0),
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::Deleted));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(7),
                patch: ItemPatch::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_touching_store() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_update().never();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                patch: ItemPatch {
                    name: Some(" ".to_string()),
                    price: None,
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }
}
