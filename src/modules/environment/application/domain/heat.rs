use std::f64::consts::TAU;

use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::geo::{Bounds, Coordinates};
use super::weather::CurrentWeather;

pub const HEAT_MAP_POINTS: usize = 80;
pub const SPREAD_POINTS_PER_CITY: usize = 5;
/// Below this many regional points the synthetic pattern is appended.
pub const MIN_REGIONAL_POINTS: usize = 10;

const HEAT_MAP_RADIUS_DEG: f64 = 0.02;
const MIN_TEMP_C: f64 = 10.0;
const MAX_TEMP_C: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    /// 0 (cool) to 1 (hottest)
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ReferenceCity {
    pub name: &'static str,
    pub location: Coordinates,
}

const fn city(name: &'static str, lat: f64, lng: f64) -> ReferenceCity {
    ReferenceCity {
        name,
        location: Coordinates::known(lat, lng),
    }
}

pub const MAJOR_CITIES: [ReferenceCity; 15] = [
    city("São Paulo", -23.5505, -46.6333),
    city("Rio de Janeiro", -22.9068, -43.1729),
    city("Brasília", -15.7975, -47.8919),
    city("Salvador", -12.9714, -38.5014),
    city("Fortaleza", -3.7319, -38.5267),
    city("Belo Horizonte", -19.9167, -43.9345),
    city("Manaus", -3.1190, -60.0217),
    city("Curitiba", -25.4284, -49.2733),
    city("Recife", -8.0476, -34.8770),
    city("Porto Alegre", -30.0346, -51.2177),
    city("Belém", -1.4558, -48.4902),
    city("Goiânia", -16.6869, -49.2648),
    city("Guarulhos", -23.4541, -46.5343),
    city("Campinas", -22.9056, -47.0608),
    city("São Luís", -2.5307, -44.3068),
];

pub fn cities_in(bounds: &Bounds) -> Vec<&'static ReferenceCity> {
    MAJOR_CITIES
        .iter()
        .filter(|c| bounds.contains(&c.location))
        .collect()
}

/// Normalised distance from the urban core: 60% inner, 30% middle, 10% outer ring.
fn urban_distance<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let band: f64 = rng.gen();
    if band < 0.6 {
        rng.gen_range(0.0..0.3)
    } else if band < 0.9 {
        rng.gen_range(0.3..0.7)
    } else {
        rng.gen_range(0.7..1.0)
    }
}

/// Temperature, proximity to the core and humidity each push intensity up.
/// Clamped to [0.1, 1].
pub fn heat_intensity(weather: &CurrentWeather, distance: f64, jitter: f64) -> f64 {
    let intensity = weather.temperature / 40.0
        + (1.0 - distance) * 0.4
        + weather.relative_humidity / 100.0 * 0.2
        + jitter;
    intensity.clamp(0.1, 1.0)
}

pub fn generate_heat_map<R: Rng + ?Sized>(
    center: Coordinates,
    weather: &CurrentWeather,
    rng: &mut R,
) -> Vec<HeatPoint> {
    (0..HEAT_MAP_POINTS)
        .map(|_| {
            let distance = urban_distance(rng);
            let angle = rng.gen_range(0.0..TAU);
            let jitter = rng.gen_range(-0.05..0.05);
            HeatPoint {
                lat: center.lat + distance * angle.cos() * HEAT_MAP_RADIUS_DEG,
                lng: center.lng + distance * angle.sin() * HEAT_MAP_RADIUS_DEG,
                intensity: heat_intensity(weather, distance, jitter),
            }
        })
        .collect()
}

/// 10 °C maps to 0 and 45 °C to 1.
pub fn temperature_to_intensity(temperature: f64) -> f64 {
    ((temperature - MIN_TEMP_C) / (MAX_TEMP_C - MIN_TEMP_C)).clamp(0.0, 1.0)
}

/// The city point followed by its area of influence.
pub fn city_heat_points<R: Rng + ?Sized>(
    at: Coordinates,
    temperature: f64,
    rng: &mut R,
) -> Vec<HeatPoint> {
    let intensity = temperature_to_intensity(temperature);
    let mut points = Vec::with_capacity(SPREAD_POINTS_PER_CITY + 1);
    points.push(HeatPoint {
        lat: at.lat,
        lng: at.lng,
        intensity,
    });
    for _ in 0..SPREAD_POINTS_PER_CITY {
        points.push(HeatPoint {
            lat: at.lat + rng.gen_range(-0.1..0.1),
            lng: at.lng + rng.gen_range(-0.1..0.1),
            intensity: intensity * rng.gen_range(0.7..1.0),
        });
    }
    points
}

/// Urban heat-island pattern over the viewport: a hot ring near the centre plus
/// uniform points that cool down with distance.
pub fn smart_fallback<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Vec<HeatPoint> {
    let center = bounds.center();
    let mut points = Vec::with_capacity(48);

    for i in 0..8 {
        let angle = f64::from(i) / 8.0 * TAU;
        let distance = rng.gen_range(0.05..0.25);
        points.push(HeatPoint {
            lat: center.lat + angle.cos() * distance,
            lng: center.lng + angle.sin() * distance,
            intensity: (0.8 * (1.0 - distance / 0.25)).clamp(0.1, 1.0),
        });
    }

    for _ in 0..40 {
        let lat = lerp(bounds.south, bounds.north, rng.gen());
        let lng = lerp(bounds.west, bounds.east, rng.gen());
        let distance = ((lat - center.lat).powi(2) + (lng - center.lng).powi(2)).sqrt();
        let base = (0.7 - distance * 2.0).max(0.1);
        points.push(HeatPoint {
            lat,
            lng,
            intensity: (base + rng.gen_range(0.0..0.3)).min(1.0),
        });
    }

    points
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
