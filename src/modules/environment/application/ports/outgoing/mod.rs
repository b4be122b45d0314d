pub mod location_directory;
pub mod weather_provider;

pub use location_directory::{LocationDirectory, LocationError};
pub use weather_provider::{WeatherError, WeatherProvider};
