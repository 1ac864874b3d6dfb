//! Domain entities - weather readings and the summaries built from them

mod city_suggestion;
mod current_weather;
mod forecast;
mod observation;

pub use city_suggestion::CitySuggestion;
pub use current_weather::{Coordinates, CurrentWeather, WeatherDescription, Wind};
pub use forecast::{CityInfo, DailySummary, ForecastResult};
pub use observation::Observation;
