use async_trait::async_trait;

use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::weather::CurrentWeather;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather request failed: {0}")]
    Request(String),

    #[error("Weather provider answered with status {0}")]
    Status(u16),

    #[error("Unreadable weather payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, at: Coordinates) -> Result<CurrentWeather, WeatherError>;
}
