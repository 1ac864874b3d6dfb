//! A single forecast reading covering one ~3 hour interval

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One timestamped weather reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Seconds since the Unix epoch (UTC)
    pub timestamp_unix: i64,
    /// Temperature in the provider's units
    pub temperature: f64,
    /// Short condition label, e.g. "Rain"
    pub condition: String,
    /// Provider icon identifier, e.g. "10d"
    pub icon: String,
    /// Wind speed in the provider's units
    pub wind_speed: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(
        timestamp_unix: i64,
        temperature: f64,
        condition: impl Into<String>,
        icon: impl Into<String>,
        wind_speed: f64,
    ) -> Self {
        Self {
            timestamp_unix,
            temperature,
            condition: condition.into(),
            icon: icon.into(),
            wind_speed,
        }
    }

    /// UTC calendar date this observation falls on
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the timestamp is outside
    /// the range chrono can represent.
    pub fn utc_date(&self) -> Result<NaiveDate, DomainError> {
        DateTime::from_timestamp(self.timestamp_unix, 0)
            .map(|dt| dt.date_naive())
            .ok_or(DomainError::InvalidTimestamp(self.timestamp_unix))
    }

    /// Check that temperature and wind speed are finite numbers
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonFiniteReading` naming the offending field.
    pub fn ensure_finite(&self) -> Result<(), DomainError> {
        if !self.temperature.is_finite() {
            return Err(DomainError::NonFiniteReading {
                timestamp: self.timestamp_unix,
                field: "temperature",
            });
        }
        if !self.wind_speed.is_finite() {
            return Err(DomainError::NonFiniteReading {
                timestamp: self.timestamp_unix,
                field: "wind_speed",
            });
        }
        Ok(())
    }
}
