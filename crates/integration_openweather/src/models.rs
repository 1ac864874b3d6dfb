//! OpenWeatherMap wire models
//!
//! Only the fields the dashboard reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Latitude/longitude block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherEntry {
    /// Condition group, e.g. "Rain"
    pub main: String,
    /// Condition description, e.g. "light rain"
    pub description: String,
    /// Icon identifier, e.g. "10d"
    pub icon: String,
}

/// `main` block with temperature, pressure and humidity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Relative humidity percentage
    pub humidity: u8,
}

/// `wind` block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindReading {
    pub speed: f64,
    /// Direction in degrees
    #[serde(default)]
    pub deg: Option<u16>,
}

/// `sys` block of the current weather response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysBlock {
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /data/2.5/weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub coord: Coord,
    pub weather: Vec<WeatherEntry>,
    pub main: MainReadings,
    pub wind: WindReading,
    /// Observation time, Unix seconds
    pub dt: i64,
    pub sys: SysBlock,
    pub name: String,
}

/// One 3-hour entry of the forecast list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time, Unix seconds (UTC)
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<WeatherEntry>,
    pub wind: WindReading,
}

/// `city` block of the forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityBlock {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub coord: Option<Coord>,
}

/// Response of `GET /data/2.5/forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: CityBlock,
}

/// One result of `GET /geo/1.0/direct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Error body returned alongside non-success statuses
///
/// `cod` arrives as a string on some endpoints and a number on others.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
