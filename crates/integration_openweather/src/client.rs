//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, CurrentWeatherResponse, ForecastResponse, GeocodingEntry};

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// HTTP client could not be constructed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Requested city or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (`appid` query parameter)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Unit system: "metric", "imperial" or "standard" (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
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

impl OpenWeatherConfig {
    /// Configuration with default endpoint and units for the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching raw provider data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current weather for a city name
    async fn get_current(&self, city: &str) -> Result<CurrentWeatherResponse, OpenWeatherError>;

    /// 5 day / 3 hour forecast for a location
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, OpenWeatherError>;

    /// Cities whose name matches `query`
    async fn search_cities(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodingEntry>, OpenWeatherError>;

    /// Check if the weather service is reachable and accepts the API key
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenWeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenWeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Send a GET request and decode a successful JSON body
    ///
    /// `params` must not contain the API key; it is appended here so it
    /// never reaches the logs.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, OpenWeatherError> {
        let url = self.endpoint(path);
        debug!(url = %url, params = ?params, "Calling OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }

    /// Map non-success statuses to errors, reading the provider's message
    async fn check_status(response: Response) -> Result<Response, OpenWeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        warn!(status = %status, message = %message, "OpenWeatherMap returned an error");

        Err(match status {
            StatusCode::NOT_FOUND => OpenWeatherError::NotFound(message),
            StatusCode::UNAUTHORIZED => OpenWeatherError::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => OpenWeatherError::RateLimitExceeded,
            s if s.is_server_error() => OpenWeatherError::ServiceUnavailable(message),
            _ => OpenWeatherError::RequestFailed(message),
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentWeatherResponse, OpenWeatherError> {
        self.get_json(
            "/data/2.5/weather",
            &[("q", city.to_string()), ("units", self.config.units.clone())],
        )
        .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        self.get_json(
            "/data/2.5/forecast",
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", self.config.units.clone()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn search_cities(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodingEntry>, OpenWeatherError> {
        self.get_json(
            "/geo/1.0/direct",
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn is_healthy(&self) -> bool {
        self.get_current("London").await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OpenWeatherConfig {
        OpenWeatherConfig::with_api_key("test-key")
    }

    #[test]
    fn test_config_defaults() {
        let config = test_config();
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.units, "metric");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_key.expose_secret(), "test-key");
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let debug = format!("{:?}", test_config());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_config_serialization_skips_key() {
        let json = serde_json::to_string(&test_config()).expect("should serialize");
        assert!(!json.contains("test-key"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let config: OpenWeatherConfig =
            serde_json::from_str(r#"{"api_key":"abc"}"#).expect("should deserialize");
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.units, "metric");
        assert_eq!(config.api_key.expose_secret(), "abc");
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenWeatherClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenWeatherClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let mut config = test_config();
        config.base_url = "http://localhost:9000/".to_string();
        let client = OpenWeatherClient::new(config).expect("client creation should succeed");
        assert_eq!(
            client.endpoint("/data/2.5/weather"),
            "http://localhost:9000/data/2.5/weather"
        );
    }

    #[test]
    fn test_error_display() {
        let err = OpenWeatherError::NotFound("city not found".to_string());
        assert_eq!(err.to_string(), "Not found: city not found");

        let err = OpenWeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherClient::new(test_config()).is_ok());
    }
}
