use crate::domain::errors::{RepositoryError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_price")]
    InvalidPrice,
    #[error("item.not_found")]
    NotFound,
    /// Patch attempted on a soft-deleted item.
    #[error("item.deleted")]
    Deleted,
    #[error("item.unknown_field")]
    UnknownField(String),
    #[error("item.invalid_patch")]
    InvalidPatch,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
