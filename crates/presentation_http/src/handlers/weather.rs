//! Weather handlers
//!
//! Current conditions by city name, the daily forecast for a location and
//! city name suggestions.

use application::ApplicationError;
use axum::extract::State;
use domain::{CitySuggestion, CurrentWeather, ForecastResult, GeoLocation};
use serde::Deserialize;
use tracing::{error, instrument, warn};
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedQuery, empty_string_as_none},
    response::ApiResponse,
    state::AppState,
};

pub const CITY_REQUIRED: &str = "City parameter is required";
pub const CITY_NOT_FOUND: &str = "City not found";
pub const WEATHER_FAILED: &str = "Error fetching weather data";
pub const COORDINATES_REQUIRED: &str = "Latitude and longitude parameters are required";
pub const FORECAST_FAILED: &str = "Error fetching forecast data";
pub const SUGGESTIONS_FAILED: &str = "Error fetching city suggestions";

/// Query parameters of `/api/weather`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// City name, e.g. "London"; length is checked after trimming
    pub city: Option<String>,
}

/// Query parameters of `/api/forecast`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Latitude in degrees (-90 to 90)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: Option<f64>,

    /// Longitude in degrees (-180 to 180)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lon: Option<f64>,
}

/// Query parameters of `/api/city-suggestions`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionQuery {
    /// Partial city name; fewer than 2 characters yields no suggestions
    #[validate(length(max = 100, message = "Query must be at most 100 characters"))]
    pub query: Option<String>,
}

/// Current weather for a city
#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Current conditions", body = crate::openapi::CurrentWeatherEnvelope),
        (status = 400, description = "Missing or invalid city", body = crate::error::ErrorResponse),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WeatherQuery>,
) -> Result<ApiResponse<CurrentWeather>, ApiError> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest(CITY_REQUIRED.to_string()))?;

    state
        .weather_service
        .current_weather(city)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| match e {
            ApplicationError::NotFound(_) => {
                warn!(city, "City not found");
                ApiError::NotFound(CITY_NOT_FOUND.to_string())
            },
            other => {
                error!(city, error = %other, "Current weather lookup failed");
                ApiError::from_use_case(other, WEATHER_FAILED)
            },
        })
}

/// Daily forecast for a location
#[utoipa::path(
    get,
    path = "/api/forecast",
    tag = "weather",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Up to five daily summaries, earliest first", body = crate::openapi::ForecastEnvelope),
        (status = 400, description = "Missing or out-of-range coordinates", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider failure or unusable forecast data", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn forecast(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ForecastQuery>,
) -> Result<ApiResponse<ForecastResult>, ApiError> {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err(ApiError::BadRequest(COORDINATES_REQUIRED.to_string()));
    };
    let location = GeoLocation::new(lat, lon).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .weather_service
        .forecast(location)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| {
            error!(%location, error = %e, "Forecast lookup failed");
            ApiError::from_use_case(e, FORECAST_FAILED)
        })
}

/// City name suggestions for autocompletion
#[utoipa::path(
    get,
    path = "/api/city-suggestions",
    tag = "weather",
    params(SuggestionQuery),
    responses(
        (status = 200, description = "At most five matching cities", body = crate::openapi::SuggestionsEnvelope),
        (status = 500, description = "Provider failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn city_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SuggestionQuery>,
) -> Result<ApiResponse<Vec<CitySuggestion>>, ApiError> {
    let query = query.query.unwrap_or_default();

    state
        .weather_service
        .city_suggestions(&query)
        .await
        .map(ApiResponse::ok)
        .map_err(|e| {
            error!(query = %query, error = %e, "City suggestion lookup failed");
            ApiError::from_use_case(e, SUGGESTIONS_FAILED)
        })
}
