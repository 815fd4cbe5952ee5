use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = match &self {
            ProductError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(violations.clone(), path),
            ),
            ProductError::NotFound(_) | ProductError::CategoryNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    StatusCode::NOT_FOUND,
                    "Resource not found",
                    self.to_string(),
                    path,
                ),
            ),
            ProductError::Integrity => (
                StatusCode::CONFLICT,
                ErrorResponse::new(
                    StatusCode::CONFLICT,
                    "Data Integrity Violation",
                    self.to_string(),
                    path,
                ),
            ),
            ProductError::ExchangeRateUnavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service Unavailable",
                    message.clone(),
                    path,
                ),
            ),
            ProductError::Repository(err) => {
                tracing::error!(path, "Product repository failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(path),
                )
            }
        };

        (status, Json(body))
    }
}
