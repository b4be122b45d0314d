use std::sync::Arc;

use crate::modules::environment::application::ports::incoming::use_cases::{
    GetHeatMapUseCase, GetVegetationUseCase, GetWeatherUseCase, IrradianceUseCase,
    LocationUseCase,
};

#[derive(Clone)]
pub struct EnvironmentUseCases {
    pub weather: Arc<dyn GetWeatherUseCase + Send + Sync>,
    pub heat_map: Arc<dyn GetHeatMapUseCase + Send + Sync>,
    pub vegetation: Arc<dyn GetVegetationUseCase + Send + Sync>,
    pub irradiance: Arc<dyn IrradianceUseCase + Send + Sync>,
    pub locations: Arc<dyn LocationUseCase + Send + Sync>,
}
