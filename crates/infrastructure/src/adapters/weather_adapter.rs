//! Weather adapter - Implements `WeatherProviderPort` using integration_openweather

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{ProviderForecast, WeatherProviderPort},
};
use async_trait::async_trait;
use chrono::DateTime;
use domain::{
    CityInfo, CityName, CitySuggestion, Coordinates, CurrentWeather, DomainError, GeoLocation,
    Observation, WeatherDescription, Wind,
};
use integration_openweather::{
    CurrentWeatherResponse, ForecastEntry, GeocodingEntry, OpenWeatherClient, OpenWeatherConfig,
    OpenWeatherError, WeatherClient, WeatherEntry,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter").finish_non_exhaustive()
    }
}

impl OpenWeatherAdapter {
    /// Create an adapter backed by a new HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map provider error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::NotFound(e) => ApplicationError::NotFound(e),
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::UpstreamData(e),
            OpenWeatherError::Unauthorized(e) => ApplicationError::Configuration(format!(
                "Weather provider rejected the API key: {e}"
            )),
            OpenWeatherError::InvalidCoordinates => DomainError::InvalidCoordinates.into(),
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// First entry of a `weather` array; the provider always sends at least one
    fn primary_condition(
        weather: Vec<WeatherEntry>,
        timestamp: i64,
    ) -> Result<WeatherEntry, ApplicationError> {
        weather.into_iter().next().ok_or_else(|| {
            ApplicationError::UpstreamData(format!("No weather condition reported at {timestamp}"))
        })
    }

    fn map_current(response: CurrentWeatherResponse) -> Result<CurrentWeather, ApplicationError> {
        let weather = Self::primary_condition(response.weather, response.dt)?;
        let timestamp = DateTime::from_timestamp(response.dt, 0).ok_or_else(|| {
            ApplicationError::UpstreamData(format!("Invalid observation time {}", response.dt))
        })?;

        Ok(CurrentWeather {
            city: response.name,
            country: response.sys.country,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            pressure: response.main.pressure,
            weather: WeatherDescription {
                main: weather.main,
                description: weather.description,
                icon: weather.icon,
            },
            wind: Wind {
                speed: response.wind.speed,
                direction: response.wind.deg,
            },
            timestamp,
            coordinates: Coordinates {
                lat: response.coord.lat,
                lon: response.coord.lon,
            },
        })
    }

    fn map_observation(entry: ForecastEntry) -> Result<Observation, ApplicationError> {
        let weather = Self::primary_condition(entry.weather, entry.dt)?;
        Ok(Observation::new(
            entry.dt,
            entry.main.temp,
            weather.main,
            weather.icon,
            entry.wind.speed,
        ))
    }

    fn map_suggestion(entry: GeocodingEntry) -> CitySuggestion {
        CitySuggestion::new(entry.name, entry.country, entry.state)
    }
}

#[async_trait]
impl WeatherProviderPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError> {
        let response = self
            .client
            .get_current(city.as_str())
            .await
            .map_err(Self::map_error)?;

        let current = Self::map_current(response)?;
        debug!(
            temperature = current.temperature,
            condition = %current.weather.main,
            "Retrieved current weather"
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast_observations(
        &self,
        location: &GeoLocation,
    ) -> Result<ProviderForecast, ApplicationError> {
        let response = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(entries = response.list.len(), "Retrieved forecast");

        let observations = response
            .list
            .into_iter()
            .map(Self::map_observation)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProviderForecast {
            city: CityInfo::new(response.city.name, response.city.country),
            observations,
        })
    }

    #[instrument(skip(self))]
    async fn city_suggestions(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<CitySuggestion>, ApplicationError> {
        let entries = self
            .client
            .search_cities(query, limit)
            .await
            .map_err(Self::map_error)?;

        debug!(count = entries.len(), "Retrieved city suggestions");
        Ok(entries.into_iter().map(Self::map_suggestion).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
