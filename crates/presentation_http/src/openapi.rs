//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document and Swagger UI for the dashboard API.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for the Weather Dashboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Dashboard API",
        description = "Current conditions, 5-day forecasts and city suggestions backed by OpenWeatherMap",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "weather", description = "Weather lookups")
    ),
    paths(
        handlers::health::index,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::weather::current_weather,
        handlers::weather::forecast,
        handlers::weather::city_suggestions,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ServiceStatus,
            crate::error::ErrorResponse,
            CurrentWeatherEnvelope,
            ForecastEnvelope,
            SuggestionsEnvelope,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

// Schema-only mirrors of the domain types, which carry no OpenAPI derives.

/// Condition group, description and icon
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct WeatherDescriptionSchema {
    #[schema(example = "Clouds")]
    main: String,
    #[schema(example = "broken clouds")]
    description: String,
    #[schema(example = "04d")]
    icon: String,
}

/// Wind speed and direction
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct WindSchema {
    speed: f64,
    /// Degrees, omitted by the provider in calm conditions
    direction: Option<u16>,
}

/// Station coordinates
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CoordinatesSchema {
    lat: f64,
    lon: f64,
}

/// Current conditions for a city
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CurrentWeatherSchema {
    #[schema(example = "London")]
    city: String,
    #[schema(example = "GB")]
    country: String,
    temperature: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
    weather: WeatherDescriptionSchema,
    wind: WindSchema,
    /// RFC 3339, UTC
    #[schema(example = "2025-04-13T12:00:00Z")]
    timestamp: String,
    coordinates: CoordinatesSchema,
}

/// One calendar day of the forecast (UTC)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct DailySummarySchema {
    #[schema(example = "2025-04-13")]
    date: String,
    #[schema(example = "Sunday")]
    day: String,
    temp_max: i32,
    temp_min: i32,
    temp_avg: i32,
    /// Most frequent condition of the day
    #[schema(example = "Rain")]
    weather: String,
    /// Most frequent icon of the day
    #[schema(example = "10d")]
    icon: String,
    /// Mean wind speed, one decimal place
    wind_speed: f64,
    observation_count: usize,
}

/// City the forecast belongs to
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CityInfoSchema {
    name: String,
    country: String,
}

/// Forecast payload
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ForecastSchema {
    city: CityInfoSchema,
    forecast: Vec<DailySummarySchema>,
}

/// City suggestion
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CitySuggestionSchema {
    name: String,
    country: String,
    state: Option<String>,
    #[schema(example = "Portland, Oregon, US")]
    full_name: String,
}

/// `{ success, data }` around current weather
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CurrentWeatherEnvelope {
    success: bool,
    data: CurrentWeatherSchema,
}

/// `{ success, data }` around a forecast
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ForecastEnvelope {
    success: bool,
    data: ForecastSchema,
}

/// `{ success, data }` around city suggestions
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SuggestionsEnvelope {
    success: bool,
    data: Vec<CitySuggestionSchema>,
}

/// Create OpenAPI documentation routes
///
/// - `/api-docs/openapi.json` - OpenAPI document
/// - `/swagger-ui` - Swagger UI
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
