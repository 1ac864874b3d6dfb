//! Weather service
//!
//! Validates dashboard requests, calls the weather provider and turns the
//! raw 3-hourly forecast into daily summaries.

use std::{fmt, sync::Arc};

use domain::{CityName, CitySuggestion, CurrentWeather, ForecastResult, GeoLocation, aggregate};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ProviderForecast, WeatherProviderPort},
};

/// Maximum number of city suggestions returned
pub const SUGGESTION_LIMIT: u8 = 5;

/// Queries shorter than this (in characters, after trimming) yield no suggestions
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Weather service for the dashboard use cases
pub struct WeatherService {
    provider: Arc<dyn WeatherProviderPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(provider: Arc<dyn WeatherProviderPort>) -> Self {
        Self { provider }
    }

    /// Get current weather for a city name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the name is blank or too long,
    /// otherwise whatever the provider reports.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ApplicationError> {
        let city = CityName::new(city)?;
        info!(city = %city, "Getting current weather");
        self.provider.current_weather(&city).await
    }

    /// Get the daily forecast for a location
    ///
    /// # Errors
    ///
    /// Returns provider errors unchanged. Observations that cannot be
    /// aggregated are reported as `ApplicationError::UpstreamData`.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn forecast(&self, location: GeoLocation) -> Result<ForecastResult, ApplicationError> {
        let ProviderForecast { city, observations } =
            self.provider.forecast_observations(&location).await?;

        let result = aggregate(city, &observations).map_err(|e| {
            warn!(error = %e, "Provider returned unusable forecast data");
            ApplicationError::UpstreamData(e.to_string())
        })?;

        if result.is_empty() {
            warn!(city = %result.city.name, "Provider returned no forecast observations");
        } else {
            debug!(
                observations = observations.len(),
                days = result.forecast.len(),
                "Aggregated forecast"
            );
        }
        Ok(result)
    }

    /// Suggest cities matching a partial name
    ///
    /// Short queries return an empty list without contacting the provider.
    ///
    /// # Errors
    ///
    /// Returns provider errors unchanged.
    #[instrument(skip(self))]
    pub async fn city_suggestions(
        &self,
        query: &str,
    ) -> Result<Vec<CitySuggestion>, ApplicationError> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            debug!("Query too short for suggestions");
            return Ok(Vec::new());
        }

        self.provider.city_suggestions(query, SUGGESTION_LIMIT).await
    }

    /// Whether the upstream provider is reachable
    pub async fn is_healthy(&self) -> bool {
        self.provider.is_available().await
    }
}
