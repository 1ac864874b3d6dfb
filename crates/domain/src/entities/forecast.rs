//! Daily forecast summaries
//!
//! Field names on the wire follow the dashboard frontend's schema
//! (`day`, `weather`, `wind_speed`), hence the serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// City metadata passed through from the provider untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    /// City name as reported by the provider
    pub name: String,
    /// ISO 3166 country code
    pub country: String,
}

impl CityInfo {
    /// Create city metadata
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

/// Aggregated statistics for one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// UTC calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Sunday"
    #[serde(rename = "day")]
    pub day_name: String,
    /// Rounded maximum temperature
    pub temp_max: i32,
    /// Rounded minimum temperature
    pub temp_min: i32,
    /// Rounded mean temperature
    pub temp_avg: i32,
    /// Most frequent condition label
    #[serde(rename = "weather")]
    pub condition: String,
    /// Most frequent icon identifier
    pub icon: String,
    /// Mean wind speed, one decimal place
    #[serde(rename = "wind_speed")]
    pub wind_speed_avg: f64,
    /// Number of observations that fell on this date
    pub observation_count: usize,
}

/// Forecast for a city: metadata plus up to five daily summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// City metadata
    pub city: CityInfo,
    /// Daily summaries, ascending by date
    pub forecast: Vec<DailySummary>,
}

impl ForecastResult {
    /// Whether there are no daily summaries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}
