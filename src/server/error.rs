//! Error-to-HTTP response conversion.
//!
//! Route handlers return `Result<T, AppError>`. Client errors carry their
//! message through; server errors are logged here and the caller only sees a
//! generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movienight_common::Error;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "Internal server error";
const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// Wrapper so we can implement `IntoResponse` for the common error type.
#[derive(Debug)]
pub enum AppError {
    Catalog(Error),
    /// Request body was not valid JSON or had the wrong shape.
    Body(JsonRejection),
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::Catalog(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        Self::Body(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Body(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                (StatusCode::BAD_REQUEST, "invalid_body", INVALID_BODY_MESSAGE.to_string())
            }
            AppError::Catalog(err) => {
                let status = StatusCode::from_u16(err.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

                if status.is_server_error() {
                    tracing::error!(status = %status, error = %err, "Server error in API handler");
                    (status, "internal_error", INTERNAL_MESSAGE.to_string())
                } else {
                    let code = err.code();
                    let message = match err {
                        Error::Validation(msg) => msg,
                        Error::NotFound(_) => "Movie not found".to_string(),
                        other => other.to_string(),
                    };
                    (status, code, message)
                }
            }
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}
