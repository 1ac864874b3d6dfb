//! Domain layer for the Weather Dashboard
//!
//! Contains the forecast aggregation logic, weather entities, value objects
//! and domain errors. Nothing in here performs I/O.

pub mod aggregation;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aggregation::{MAX_FORECAST_DAYS, aggregate, most_frequent};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
