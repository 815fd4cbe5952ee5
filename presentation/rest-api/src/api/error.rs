use chrono::{SecondsFormat, Utc};
use poem::http::StatusCode;
use poem::{Endpoint, EndpointExt, IntoResponse, Response};
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::FieldViolation;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct FieldErrorResponse {
    pub field_name: String,
    pub message: String,
}

impl From<FieldViolation> for FieldErrorResponse {
    fn from(violation: FieldViolation) -> Self {
        Self {
            field_name: violation.field,
            message: violation.message,
        }
    }
}

/// Body returned for every failed request.
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: String,
    /// Status name, e.g. `NOT_FOUND`.
    pub status: String,
    pub error: String,
    pub message: String,
    pub path: String,
    #[oai(skip_serializing_if_is_none)]
    pub field_errors: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: timestamp(),
            status: status_name(status),
            error: error.to_string(),
            message: message.into(),
            path: path.to_string(),
            field_errors: None,
        }
    }

    pub fn validation(violations: Vec<FieldViolation>, path: &str) -> Self {
        Self {
            field_errors: Some(violations.into_iter().map(Into::into).collect()),
            ..Self::new(
                StatusCode::BAD_REQUEST,
                "Validation error",
                "One or more fields failed validation.",
                path,
            )
        }
    }

    pub fn internal(path: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            UNEXPECTED_ERROR_MESSAGE,
            path,
        )
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>);
}

/// UTC timestamp with second precision, e.g. `2025-06-01T12:00:00Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `StatusCode::NOT_FOUND` -> `"NOT_FOUND"`.
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

/// Renders errors raised by the framework itself (unparsable JSON, path or
/// query parameters, unknown routes) with the same body as domain errors.
pub fn with_json_errors<E>(ep: E) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    ep.around(|ep, req| async move {
        let path = req.uri().path().to_string();
        match ep.call(req).await {
            Ok(response) => Ok(response.into_response()),
            Err(err) => Ok(framework_error_response(err, &path)),
        }
    })
}

fn framework_error_response(err: poem::Error, path: &str) -> Response {
    let status = err.status();
    let body = if status.is_server_error() {
        tracing::error!(path, "Unhandled error: {}", err);
        ErrorResponse::internal(path)
    } else {
        let error = status.canonical_reason().unwrap_or("Bad Request");
        ErrorResponse::new(status, error, err.to_string(), path)
    };

    Json(body).with_status(status).into_response()
}
