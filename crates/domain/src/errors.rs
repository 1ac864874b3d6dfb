//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is empty or too long
    #[error("Invalid city name: {0}")]
    InvalidCityName(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Observation timestamp cannot be mapped to a calendar date
    #[error("Invalid observation timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Observation carries a NaN or infinite reading
    #[error("Invalid observation at {timestamp}: {field} is not a finite number")]
    NonFiniteReading {
        timestamp: i64,
        field: &'static str,
    },
}
