//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the OpenWeatherMap client
//! and hosts configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, Environment, OpenWeatherAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
