use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.not_found")
            }
            CartError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found")
            }
            CartError::Validation(inner) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                inner.to_string(),
            ),
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::ValidationError;

    #[test]
    fn should_map_missing_cart_and_item_to_404() {
        let (cart_status, _) = CartError::NotFound.into_error_response();
        let (item_status, json) = CartError::ItemNotFound.into_error_response();

        assert_eq!(cart_status, StatusCode::NOT_FOUND);
        assert_eq!(item_status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "cart.item_not_found");
    }

    #[test]
    fn should_map_validation_to_422_with_code() {
        let (status, json) =
            CartError::Validation(ValidationError::NegativeQuantityBound).into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "validation.negative_quantity_bound");
    }
}
