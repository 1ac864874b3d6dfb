//! Weather dashboard HTTP presentation layer
//!
//! Axum router, handlers and middleware for the dashboard API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer, ValidatedQuery, ValidationError};
pub use openapi::ApiDoc;
pub use response::ApiResponse;
pub use routes::{create_app, create_router};
pub use state::AppState;
