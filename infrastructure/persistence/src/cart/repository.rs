use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::shared::value_objects::CartId;

use crate::store::InMemoryStore;

/// Process-local cart catalog.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    store: InMemoryStore<Cart>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn create(&self) -> Result<Cart, RepositoryError> {
        let cart = self.store.insert_with(|id| Cart::new(CartId::new(id)))?;
        tracing::debug!(cart_id = %cart.id, "cart stored");
        Ok(cart)
    }

    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError> {
        self.store.get(id.value())
    }

    async fn get_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        self.store.all()
    }

    async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError> {
        self.store.modify(id.value(), |cart| {
            cart.add_item(item);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::domain::item::model::NewItem;
    use business::domain::shared::value_objects::ItemId;

    fn item(id: u64, name: &str, price: f64) -> Item {
        Item::create(
            ItemId::new(id),
            NewItem::new(name.to_string(), price).unwrap(),
        )
    }

    #[tokio::test]
    async fn should_create_empty_carts_with_increasing_ids() {
        let repository = CartRepositoryInMemory::new();

        let first = repository.create().await.unwrap();
        let second = repository.create().await.unwrap();

        assert_eq!(first.id, CartId::new(1));
        assert_eq!(second.id, CartId::new(2));
        assert!(first.lines().is_empty());
    }

    #[tokio::test]
    async fn should_persist_added_items() {
        let repository = CartRepositoryInMemory::new();
        let cart = repository.create().await.unwrap();
        let pen = item(1, "pen", 1.5);

        repository.add_item(cart.id, &pen).await.unwrap();
        repository.add_item(cart.id, &pen).await.unwrap();
        let stored = repository.get_by_id(cart.id).await.unwrap();

        assert_eq!(stored.lines().len(), 1);
        assert_eq!(stored.lines()[0].quantity, 2);
        assert_eq!(stored.total_price(), 3.0);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart() {
        let repository = CartRepositoryInMemory::new();

        let get = repository.get_by_id(CartId::new(1)).await;
        let add = repository.add_item(CartId::new(1), &item(1, "pen", 1.5)).await;

        assert!(matches!(get, Err(RepositoryError::NotFound)));
        assert!(matches!(add, Err(RepositoryError::NotFound)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_not_lose_concurrent_adds_to_the_same_cart() {
        let repository = Arc::new(CartRepositoryInMemory::new());
        let cart_id = repository.create().await.unwrap().id;
        let pen = Arc::new(item(1, "pen", 1.5));

        let tasks: Vec<_> = (0..10)
            .map(|_| {
                let repository = Arc::clone(&repository);
                let pen = Arc::clone(&pen);
                tokio::spawn(async move {
                    for _ in 0..20 {
                        repository.add_item(cart_id, &pen).await.unwrap();
                    }
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stored = repository.get_by_id(cart_id).await.unwrap();
        assert_eq!(stored.lines().len(), 1);
        assert_eq!(stored.total_quantity(), 200);
        assert_eq!(stored.total_price(), 300.0);
    }
}
