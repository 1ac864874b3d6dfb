//! Request validation
//!
//! Provides a `ValidatedQuery` extractor that decodes query strings and
//! validates them using the validator crate.

use std::{fmt, str::FromStr};

use axum::{
    Json,
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ErrorResponse;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid query string: {0}")]
    QueryError(#[from] QueryRejection),
    #[error("{0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::QueryError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(message, "validation_error")),
        )
            .into_response()
    }
}

/// Join field errors into one message, using the custom message when present
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{field}: {}", error.code), ToString::to_string)
            })
        })
        .collect();
    // field_errors() is a HashMap; keep the output stable
    messages.sort();
    messages.join("; ")
}

/// A query-string extractor that also validates the parameters
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Search {
///     #[validate(length(max = 100))]
///     query: Option<String>,
/// }
///
/// async fn handler(ValidatedQuery(search): ValidatedQuery<Search>) {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(format_errors(&e)))?;

        Ok(Self(value))
    }
}

/// Deserialize an optional parameter, treating `?name=` like an absent one
///
/// Use with `#[serde(default, deserialize_with = "empty_string_as_none")]`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
