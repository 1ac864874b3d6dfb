//! Application layer - Use cases and orchestration
//!
//! Defines the weather provider port and the service that validates
//! requests, calls the provider and aggregates forecasts.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
