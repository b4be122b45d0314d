pub mod heat_map;
pub mod irradiance;
pub mod locations;
pub mod vegetation;
pub mod weather;

pub use heat_map::{GetHeatMapUseCase, HeatMap, RegionalHeat};
pub use irradiance::{IrradianceFilter, IrradianceReport, IrradianceUseCase};
pub use locations::{GeocodedPlace, LocationUseCase};
pub use vegetation::GetVegetationUseCase;
pub use weather::{CityWeather, GetWeatherUseCase};
