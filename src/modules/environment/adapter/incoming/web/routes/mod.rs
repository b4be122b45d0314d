mod geo_query;
mod heat_map;
mod irradiance;
mod locations;
mod vegetation;
mod weather;

pub use geo_query::{BoundsQuery, CoordinatesQuery};
pub use heat_map::{
    __path_get_heat_map_handler, __path_get_regional_heat_handler, get_heat_map_handler,
    get_regional_heat_handler, HeatMapResponse, RegionalHeatResponse,
};
pub use irradiance::{
    __path_irradiance_handler, irradiance_handler, IrradianceQuery, IrradianceResponse,
};
pub use locations::{
    __path_geocode_handler, __path_list_cities_handler, __path_list_states_handler,
    geocode_handler, list_cities_handler, list_states_handler, CityListResponse, GeocodeQuery,
    GeocodeResponse, StateListResponse,
};
pub use vegetation::{__path_get_vegetation_handler, get_vegetation_handler, VegetationResponse};
pub use weather::{
    __path_get_regional_weather_handler, __path_get_weather_handler, get_regional_weather_handler,
    get_weather_handler, RegionalWeatherResponse, WeatherResponse,
};
