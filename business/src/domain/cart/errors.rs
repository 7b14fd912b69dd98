use crate::domain::errors::{RepositoryError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    /// The item to add is unknown or soft-deleted.
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
