//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap current weather, 5 day / 3 hour forecast
//! and direct geocoding APIs (<https://openweathermap.org/api>).

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient};
pub use models::{
    ApiErrorBody, CityBlock, Coord, CurrentWeatherResponse, ForecastEntry, ForecastResponse,
    GeocodingEntry, MainReadings, SysBlock, WeatherEntry, WindReading,
};
