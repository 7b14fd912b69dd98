/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The record exists but is in a state that forbids the requested change.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.persistence")]
    Persistence,
}

/// Errors raised while validating list queries, shared by items and carts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation.invalid_pagination")]
    InvalidPagination,
    #[error("validation.negative_price_bound")]
    NegativePriceBound,
    #[error("validation.negative_quantity_bound")]
    NegativeQuantityBound,
}
