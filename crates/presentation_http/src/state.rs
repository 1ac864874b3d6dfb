//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather use cases
    pub weather_service: Arc<WeatherService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Bundle a service and its configuration into handler state
    pub fn new(weather_service: WeatherService, config: AppConfig) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
            config: Arc::new(config),
        }
    }
}
