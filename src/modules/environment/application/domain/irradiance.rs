use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::geo::{Coordinates, GeoError};

/// NASA POWER all-sky surface shortwave diffuse irradiance.
pub const DIFFUSE_PARAMETER: &str = "ALLSKY_SFC_SW_DIFF";
pub const DEFAULT_UNITS: &str = "MJ/m²/day";
pub const DEFAULT_LONGNAME: &str = "All Sky Surface Shortwave Diffuse Irradiance";

/// POWER writes this in place of a missing month.
const FILL_VALUE: f64 = -999.0;
const FALLBACK_MONTHS: u32 = 3;
pub const FALLBACK_LOCATION: Coordinates = Coordinates::known(-22.429, -45.458);

const INTENSITY_FLOOR: f64 = 3.0;
const INTENSITY_CEILING: f64 = 11.0;
const INTENSITY_GAMMA: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PowerPayloadError {
    #[error("payload has no ALLSKY_SFC_SW_DIFF series")]
    MissingSeries,

    #[error("geometry needs [longitude, latitude]")]
    MissingCoordinates,

    #[error("geometry is out of range: {0}")]
    InvalidCoordinates(#[from] GeoError),
}

//
// ──────────────────────────────────────────────────────────
// POWER monthly point payload
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct PowerPayload {
    pub geometry: PowerGeometry,
    pub properties: PowerProperties,
    #[serde(default)]
    pub header: Option<PowerHeader>,
    #[serde(default)]
    pub parameters: HashMap<String, PowerParameterInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerGeometry {
    /// GeoJSON order: longitude, latitude, then optional elevation.
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    /// Parameter name to `YYYYMM` date code to value.
    pub parameter: HashMap<String, BTreeMap<String, Option<f64>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerHeader {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerParameterInfo {
    pub units: String,
    pub longname: String,
}

//
// ──────────────────────────────────────────────────────────
// Series
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIrradiance {
    pub year: i32,
    pub month: u32,
    #[schema(example = "202408")]
    pub date_code: String,
    pub value: f64,
    /// Heat-map weight, 0 to 1
    pub intensity: f64,
}

impl MonthlyIrradiance {
    fn new(year: i32, month: u32, value: f64) -> Self {
        Self {
            year,
            month,
            date_code: format!("{:04}{:02}", year, month),
            value,
            intensity: irradiance_intensity(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrradianceMetadata {
    #[schema(example = "ALLSKY_SFC_SW_DIFF")]
    pub parameter: String,
    pub units: String,
    pub longname: String,
    pub location: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "20200101 to 20241231")]
    pub time_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IrradianceStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: usize,
    pub units: String,
}

/// Monthly values at one point, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceSeries {
    pub metadata: IrradianceMetadata,
    pub months: Vec<MonthlyIrradiance>,
}

/// `YYYYMM` into year and calendar month. Annual rows (`YYYY13`) are rejected.
fn split_date_code(code: &str) -> Option<(i32, u32)> {
    let year = code.get(0..4)?.parse().ok()?;
    let month = code.get(4..6)?.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

fn is_measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != FILL_VALUE)
}

impl IrradianceSeries {
    pub fn from_power(payload: PowerPayload) -> Result<Self, PowerPayloadError> {
        let mut series = payload.properties.parameter;
        let raw = series
            .remove(DIFFUSE_PARAMETER)
            .ok_or(PowerPayloadError::MissingSeries)?;

        let (lng, lat) = match payload.geometry.coordinates.as_slice() {
            [lng, lat, ..] => (*lng, *lat),
            _ => return Err(PowerPayloadError::MissingCoordinates),
        };
        let location = Coordinates::new(lat, lng)?;

        let mut months: Vec<MonthlyIrradiance> = raw
            .iter()
            .filter_map(|(code, value)| {
                let (year, month) = split_date_code(code)?;
                Some(MonthlyIrradiance::new(year, month, is_measured(*value)?))
            })
            .collect();
        months.sort_by_key(|m| (m.year, m.month));

        let info = payload.parameters.get(DIFFUSE_PARAMETER);
        let metadata = IrradianceMetadata {
            parameter: DIFFUSE_PARAMETER.to_string(),
            units: info.map_or(DEFAULT_UNITS, |i| i.units.as_str()).to_string(),
            longname: info.map_or(DEFAULT_LONGNAME, |i| i.longname.as_str()).to_string(),
            location,
            time_range: payload.header.map(|h| format!("{} to {}", h.start, h.end)),
        };

        Ok(Self { metadata, months })
    }

    /// The three months up to and including `today`, valued 6 to 10.
    pub fn fallback<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        let months = (0..FALLBACK_MONTHS)
            .rev()
            .map(|back| {
                let index = today.year() * 12 + today.month0() as i32 - back as i32;
                let value = (rng.gen_range(6.0..10.0_f64) * 100.0).round() / 100.0;
                MonthlyIrradiance::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, value)
            })
            .collect();

        Self {
            metadata: IrradianceMetadata {
                parameter: DIFFUSE_PARAMETER.to_string(),
                units: DEFAULT_UNITS.to_string(),
                longname: DEFAULT_LONGNAME.to_string(),
                location: FALLBACK_LOCATION,
                time_range: None,
            },
            months,
        }
    }

    pub fn latest(&self) -> Option<&MonthlyIrradiance> {
        self.months.iter().max_by_key(|m| (m.year, m.month))
    }

    pub fn for_month(&self, year: i32, month: u32) -> Vec<&MonthlyIrradiance> {
        self.months
            .iter()
            .filter(|m| m.year == year && m.month == month)
            .collect()
    }

    /// `None` for an empty series.
    pub fn stats(&self) -> Option<IrradianceStats> {
        if self.months.is_empty() {
            return None;
        }
        let values = self.months.iter().map(|m| m.value);
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
        let count = self.months.len();

        Some(IrradianceStats {
            min,
            max,
            avg: values.sum::<f64>() / count as f64,
            count,
            units: self.metadata.units.clone(),
        })
    }
}

/// Maps 3 to 11 MJ/m²/day onto 0 to 1 with a gamma of 0.8.
pub fn irradiance_intensity(value: f64) -> f64 {
    ((value - INTENSITY_FLOOR) / (INTENSITY_CEILING - INTENSITY_FLOOR))
        .clamp(0.0, 1.0)
        .powf(INTENSITY_GAMMA)
}
