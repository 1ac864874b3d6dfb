//! Weather provider port
//!
//! Defines the interface the application uses to reach an upstream
//! weather provider.

use async_trait::async_trait;
use domain::{CityInfo, CityName, CitySuggestion, CurrentWeather, GeoLocation, Observation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Raw 3-hourly forecast as delivered by a provider, before aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderForecast {
    /// City the forecast belongs to
    pub city: CityInfo,
    /// Observations in provider order
    pub observations: Vec<Observation>,
}

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Get current weather for a city
    async fn current_weather(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError>;

    /// Get the raw 3-hourly forecast for a location
    async fn forecast_observations(
        &self,
        location: &GeoLocation,
    ) -> Result<ProviderForecast, ApplicationError>;

    /// Search cities whose name starts with `query`
    ///
    /// # Arguments
    /// * `query` - Partial city name, already trimmed
    /// * `limit` - Maximum number of results
    async fn city_suggestions(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<CitySuggestion>, ApplicationError>;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;
}
