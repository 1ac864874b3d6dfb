//! Ports (interfaces) for external dependencies

mod weather_port;

pub use weather_port::{ProviderForecast, WeatherProviderPort};

#[cfg(test)]
pub use weather_port::MockWeatherProviderPort;
