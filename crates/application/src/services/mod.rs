//! Application services - Use case implementations

mod weather_service;

pub use weather_service::{MIN_SUGGESTION_QUERY_LEN, SUGGESTION_LIMIT, WeatherService};
