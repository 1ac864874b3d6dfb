//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `openweather`: weather provider endpoint and credentials

mod openweather;
mod server;

use std::fmt;

use config::{ConfigBuilder, builder::DefaultState};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use openweather::OpenWeatherAppConfig;
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variables, e.g. `WEATHER_DASHBOARD__SERVER__PORT`
pub const ENV_PREFIX: &str = "WEATHER_DASHBOARD";

/// Nesting separator of environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeatherMap configuration
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional `config.toml` and environment
    ///
    /// Besides `WEATHER_DASHBOARD__*` variables, `OPENWEATHER_API_KEY` fills a
    /// missing API key and `PORT` overrides the listen port.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or `PORT` is not a port number.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., WEATHER_DASHBOARD__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_conventional_env(
            std::env::var("OPENWEATHER_API_KEY").ok(),
            std::env::var("PORT").ok(),
        )?;
        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("environment", "development")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("openweather.base_url", "https://api.openweathermap.org")?
            .set_default("openweather.units", "metric")
    }

    /// Apply the bare `OPENWEATHER_API_KEY` and `PORT` variables
    ///
    /// # Errors
    ///
    /// Returns an error if `port` is present but not a valid port number.
    pub fn apply_conventional_env(
        &mut self,
        api_key: Option<String>,
        port: Option<String>,
    ) -> Result<(), config::ConfigError> {
        if !self.openweather.has_api_key() {
            if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
                self.openweather.api_key = Some(SecretString::from(key));
                debug!("Loaded openweather.api_key from OPENWEATHER_API_KEY");
            }
        }

        if let Some(port) = port {
            self.server.port = port.trim().parse().map_err(|_| {
                config::ConfigError::Message(format!("Invalid PORT value: {port}"))
            })?;
        }

        Ok(())
    }

    /// Whether the application runs in production mode
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Logging configuration derived from the server section
    #[must_use]
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_filter: self.server.log_filter.clone(),
            log_format: self.server.log_format,
        }
    }
}
