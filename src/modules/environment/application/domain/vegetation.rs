use std::f64::consts::TAU;

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::geo::Coordinates;

pub const VEGETATION_PATCHES: usize = 25;
const AREA_SIZE_DEG: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Low,
    Moderate,
    High,
}

impl Density {
    pub fn from_ndvi(ndvi: f64) -> Self {
        if ndvi < 0.2 {
            Density::Low
        } else if ndvi < 0.5 {
            Density::Moderate
        } else {
            Density::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct VegetationPatch {
    pub lat: f64,
    pub lng: f64,
    /// Metres
    pub radius: f64,
    pub ndvi: f64,
    pub density: Density,
}

/// Built-up core has sparse cover, the periphery is greener.
fn ndvi_for_distance<R: Rng + ?Sized>(distance: f64, rng: &mut R) -> f64 {
    if distance < 0.3 {
        rng.gen_range(0.1..0.4)
    } else if distance < 0.7 {
        rng.gen_range(0.3..0.7)
    } else {
        rng.gen_range(0.6..0.9)
    }
}

pub fn generate_patches<R: Rng + ?Sized>(center: Coordinates, rng: &mut R) -> Vec<VegetationPatch> {
    (0..VEGETATION_PATCHES)
        .map(|_| {
            let distance: f64 = rng.gen();
            let angle = rng.gen_range(0.0..TAU);
            let ndvi = ndvi_for_distance(distance, rng);
            VegetationPatch {
                lat: center.lat + distance * AREA_SIZE_DEG * angle.cos(),
                lng: center.lng + distance * AREA_SIZE_DEG * angle.sin(),
                radius: 300.0 + ndvi * 700.0,
                ndvi,
                density: Density::from_ndvi(ndvi),
            }
        })
        .collect()
}
