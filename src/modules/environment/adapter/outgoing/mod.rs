mod http_client;
mod ibge_nominatim;
mod open_meteo;

pub use http_client::build_http_client;
pub use ibge_nominatim::HttpLocationDirectory;
pub use open_meteo::OpenMeteoClient;
