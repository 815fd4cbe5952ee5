use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = match &self {
            CategoryError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(violations.clone(), path),
            ),
            CategoryError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    StatusCode::NOT_FOUND,
                    "Resource not found",
                    self.to_string(),
                    path,
                ),
            ),
            CategoryError::NameAlreadyExists(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(
                    StatusCode::CONFLICT,
                    "Unique Constraint Violation",
                    self.to_string(),
                    path,
                ),
            ),
            CategoryError::InUse(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(
                    StatusCode::CONFLICT,
                    "Foreign Key Violation",
                    "Cannot delete or update this resource as it is linked to other existing data.",
                    path,
                ),
            ),
            CategoryError::Repository(err) => {
                tracing::error!(path, "Category repository failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(path),
                )
            }
        };

        (status, Json(body))
    }
}
