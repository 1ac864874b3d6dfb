//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;

pub use city_name::{CityName, MAX_CITY_NAME_LEN};
pub use geo_location::GeoLocation;
