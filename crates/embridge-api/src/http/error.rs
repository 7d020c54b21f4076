//! Application error type mapping to HTTP status codes and plain-text bodies.

use axum::http::StatusCode;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use embridge_types::error::TranslateError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Any method other than POST on the embeddings route.
    MethodNotAllowed,
    /// Body is not a valid embeddings request.
    BadRequest(String),
    /// A batch failed upstream; the request is aborted.
    Upstream(TranslateError),
}

impl From<TranslateError> for AppError {
    fn from(e: TranslateError) -> Self {
        AppError::Upstream(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::MethodNotAllowed => (
                status,
                [(CONTENT_TYPE, TEXT_PLAIN), (ALLOW, "POST")],
                "Method not allowed",
            )
                .into_response(),
            AppError::BadRequest(message) => {
                (status, [(CONTENT_TYPE, TEXT_PLAIN)], message).into_response()
            }
            AppError::Upstream(e) => {
                (status, [(CONTENT_TYPE, TEXT_PLAIN)], e.to_string()).into_response()
            }
        }
    }
}
