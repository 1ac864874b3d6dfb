//! API error handling
//!
//! Every failure is rendered as `{ "success": false, "message", "code" }`.
//! In production mode, internal errors carry no details.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Set to `false` in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// `message` is shown to clients, `details` only outside production
    #[error("{message}: {details}")]
    Internal { message: String, details: String },
}

impl ApiError {
    /// Internal error with a client-facing message and diagnostic details
    pub fn internal(message: impl Into<String>, details: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            details: details.to_string(),
        }
    }

    /// Map a failed use case to the response of the route that ran it
    ///
    /// Invalid input becomes 400; anything else becomes 500 with
    /// `failure_message`.
    pub fn from_use_case(err: ApplicationError, failure_message: &str) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            other => Self::internal(failure_message, other),
        }
    }

    const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Diagnostic details, omitted in production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Failure body without details
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = match self {
            Self::BadRequest(message) | Self::NotFound(message) => {
                ErrorResponse::new(message, code)
            },
            Self::Internal { message, details } => ErrorResponse {
                details: should_expose_details().then_some(details),
                ..ErrorResponse::new(message, code)
            },
        };

        (status, Json(body)).into_response()
    }
}
