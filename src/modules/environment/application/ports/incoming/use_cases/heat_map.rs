use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::domain::heat::HeatPoint;
use crate::modules::environment::application::domain::weather::WeatherSnapshot;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeatMap {
    pub center: Coordinates,
    pub weather: WeatherSnapshot,
    pub points: Vec<HeatPoint>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionalHeat {
    /// Reference cities found inside the bounds
    pub cities_sampled: usize,
    /// True when the synthetic heat-island pattern was appended
    pub fallback_used: bool,
    pub points: Vec<HeatPoint>,
}

#[async_trait]
pub trait GetHeatMapUseCase: Send + Sync {
    async fn around(&self, center: Coordinates) -> HeatMap;

    async fn regional(&self, bounds: Bounds) -> RegionalHeat;
}
