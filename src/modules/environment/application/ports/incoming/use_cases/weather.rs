use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::domain::weather::WeatherSnapshot;

/// Weather marker for one reference city.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CityWeather {
    #[schema(example = "São Paulo")]
    pub city: String,
    pub location: Coordinates,
    pub weather: WeatherSnapshot,
}

/// Never fails: an unreachable provider yields a fallback snapshot.
#[async_trait]
pub trait GetWeatherUseCase: Send + Sync {
    async fn execute(&self, at: Coordinates) -> WeatherSnapshot;

    /// One reading per reference city inside `bounds`. Cities the provider
    /// cannot serve get a latitude-based estimate.
    async fn regional(&self, bounds: Bounds) -> Vec<CityWeather>;
}
