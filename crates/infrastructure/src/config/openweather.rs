//! OpenWeatherMap provider configuration.

use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap configuration as read from config files and environment
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; falls back to `OPENWEATHER_API_KEY` when unset
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Unit system: "metric", "imperial" or "standard"
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration
    ///
    /// A missing key becomes an empty one; the provider then answers 401.
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .clone()
                .unwrap_or_else(|| SecretString::from(String::new())),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
