mod heat_map_service;
mod irradiance_service;
mod location_service;
mod vegetation_service;
mod weather_service;

pub use heat_map_service::HeatMapService;
pub use irradiance_service::IrradianceService;
pub use location_service::LocationService;
pub use vegetation_service::VegetationService;
pub use weather_service::WeatherService;
