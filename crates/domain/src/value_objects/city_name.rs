//! City name value object
//!
//! A trimmed, non-empty city search term as typed by the user.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  London ").unwrap();
//! assert_eq!(city.as_str(), "London");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Maximum accepted length of a city search term, in characters
pub const MAX_CITY_NAME_LEN: usize = 100;

/// A validated city search term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct CityName {
    #[validate(length(min = 1, max = 100))]
    value: String,
}

impl CityName {
    /// Create a city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCityName` if the trimmed name is empty
    /// or longer than [`MAX_CITY_NAME_LEN`] characters.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: name.as_ref().trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidCityName(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the city name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
