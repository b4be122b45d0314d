use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::environment::application::domain::geo::{Bounds, Coordinates, GeoError};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CoordinatesQuery {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl TryFrom<CoordinatesQuery> for Coordinates {
    type Error = GeoError;

    fn try_from(q: CoordinatesQuery) -> Result<Self, Self::Error> {
        Coordinates::new(q.lat, q.lng)
    }
}

/// Visible map area
#[derive(Debug, Deserialize, IntoParams)]
pub struct BoundsQuery {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl TryFrom<BoundsQuery> for Bounds {
    type Error = GeoError;

    fn try_from(q: BoundsQuery) -> Result<Self, Self::Error> {
        Bounds::new(q.south, q.west, q.north, q.east)
    }
}
