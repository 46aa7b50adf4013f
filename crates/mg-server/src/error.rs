//! Error-to-HTTP response conversion.
//!
//! The two storage-backed services answer failures in different shapes:
//! the people API always replies with a JSON `{"error": ...}` object
//! ([`AppError`]), the cats API replies to bad queries with a JSON
//! `{"code", "message"}` object and to internal failures with a plain-text
//! line ([`CatsError`]). Both log the underlying cause of server errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// Message sent in place of the cause for 5xx responses from the people API.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: mg_core::Error,
}

impl AppError {
    pub fn new(inner: mg_core::Error) -> Self {
        Self { inner }
    }
}

impl From<mg_core::Error> for AppError {
    fn from(e: mg_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match self.inner {
            mg_core::Error::Validation(msg) | mg_core::Error::Parse(msg) => msg,
            other => {
                tracing::error!(status = %status, error = %other, "Server error in API handler");
                INTERNAL_MESSAGE.to_string()
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Body of a rejected cats query.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Failure of a cats handler.
#[derive(Debug)]
pub enum CatsError {
    /// Missing or invalid query input; answered with 400 and [`ErrorResponse`].
    Query(&'static str),
    /// Internal failure; answered with 500 and `message` as plain text.
    Internal {
        message: &'static str,
        source: mg_core::Error,
    },
}

impl CatsError {
    pub fn internal(message: &'static str, source: impl Into<mg_core::Error>) -> Self {
        CatsError::Internal {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for CatsError {
    fn into_response(self) -> Response {
        match self {
            CatsError::Query(message) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ErrorResponse {
                    code: status.as_u16(),
                    message: message.to_string(),
                };
                (status, axum::Json(body)).into_response()
            }
            CatsError::Internal { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
