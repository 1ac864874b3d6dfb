//! HTTP request handlers

pub mod health;
pub mod weather;

use axum::http::StatusCode;

use crate::error::ErrorResponse;

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, axum::Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(ErrorResponse::new("Route not found", "not_found")),
    )
}
