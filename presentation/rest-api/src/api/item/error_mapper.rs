use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ItemError::NameEmpty | ItemError::InvalidPrice | ItemError::InvalidPatch => {
                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ValidationError",
                    self.to_string(),
                )
            }
            ItemError::UnknownField(field) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                format!("{}: {}", self, field),
            ),
            ItemError::Validation(inner) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                inner.to_string(),
            ),
            ItemError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "item.not_found")
            }
            ItemError::Deleted => {
                error_response(StatusCode::NOT_MODIFIED, "NotModified", "item.deleted")
            }
            ItemError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
