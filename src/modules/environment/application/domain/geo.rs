use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Latitude must be between -90 and 90")]
    InvalidLatitude,

    #[error("Longitude must be between -180 and 180")]
    InvalidLongitude,

    #[error("South must not exceed north and west must not exceed east")]
    InvertedBounds,
}

fn check_lat(lat: f64) -> Result<f64, GeoError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(GeoError::InvalidLatitude)
    }
}

fn check_lng(lng: f64) -> Result<f64, GeoError> {
    if (-180.0..=180.0).contains(&lng) {
        Ok(lng)
    } else {
        Err(GeoError::InvalidLongitude)
    }
}

/// A WGS84 point. Only constructible with in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Coordinates {
    #[schema(example = -23.5505)]
    pub lat: f64,
    #[schema(example = -46.6333)]
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        Ok(Self {
            lat: check_lat(lat)?,
            lng: check_lng(lng)?,
        })
    }

    /// Only for compile-time reference points that are known to be valid.
    pub(crate) const fn known(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Map viewport as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, GeoError> {
        let (south, north) = (check_lat(south)?, check_lat(north)?);
        let (west, east) = (check_lng(west)?, check_lng(east)?);
        if south > north || west > east {
            return Err(GeoError::InvertedBounds);
        }
        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    pub fn contains(&self, point: &Coordinates) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    pub fn center(&self) -> Coordinates {
        Coordinates {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }
}
