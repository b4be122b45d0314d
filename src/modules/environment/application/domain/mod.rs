pub mod geo;
pub mod heat;
pub mod irradiance;
pub mod locations;
pub mod source;
pub mod vegetation;
pub mod weather;
