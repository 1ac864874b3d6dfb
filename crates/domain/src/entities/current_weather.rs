//! Current conditions for a city, in the dashboard's simplified schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition group, description and icon of the current weather
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescription {
    /// Condition group, e.g. "Clouds"
    pub main: String,
    /// Longer description, e.g. "broken clouds"
    pub description: String,
    /// Provider icon identifier
    pub icon: String,
}

/// Wind reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in the provider's units
    pub speed: f64,
    /// Meteorological direction in degrees, when reported
    pub direction: Option<u16>,
}

/// Latitude/longitude pair as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as reported by the provider
    pub city: String,
    /// ISO 3166 country code
    pub country: String,
    /// Temperature
    pub temperature: f64,
    /// Apparent (feels like) temperature
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Condition details
    pub weather: WeatherDescription,
    /// Wind details
    pub wind: Wind,
    /// Observation time
    pub timestamp: DateTime<Utc>,
    /// Location of the reporting station
    pub coordinates: Coordinates,
}

impl CurrentWeather {
    /// One-line summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}, {}: {} {:.1}° (feels like {:.1}°), humidity {}%, wind {:.1}",
            self.city,
            self.country,
            self.weather.description,
            self.temperature,
            self.feels_like,
            self.humidity,
            self.wind.speed
        )
    }
}
