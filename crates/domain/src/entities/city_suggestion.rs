//! City autocomplete suggestion

use serde::{Deserialize, Serialize};

/// A city matching an autocomplete query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySuggestion {
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Display label, e.g. "Portland, Oregon, US"
    pub full_name: String,
}

impl CitySuggestion {
    /// Build a suggestion, deriving the display label
    pub fn new(name: impl Into<String>, country: impl Into<String>, state: Option<String>) -> Self {
        let name = name.into();
        let country = country.into();
        let full_name = match state.as_deref() {
            Some(state) if !state.is_empty() => format!("{name}, {state}, {country}"),
            _ => format!("{name}, {country}"),
        };
        Self {
            name,
            country,
            state,
            full_name,
        }
    }
}
