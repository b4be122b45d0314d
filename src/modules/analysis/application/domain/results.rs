use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::entities::AnalysisKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnergyEfficiency {
    Low,
    Medium,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeatResults {
    pub critical_areas: u32,
    /// °C
    pub avg_temperature: f64,
    pub recommendations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VegetationResults {
    pub ndvi: f64,
    /// Percent of the area
    pub green_cover: u32,
    pub expansion_areas: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityResults {
    pub sustainability_index: f64,
    pub energy_efficiency: EnergyEfficiency,
    pub improvements: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MobilityResults {
    /// Percent
    pub accessibility: u32,
    pub traffic: u32,
    pub recommendations: u32,
}

/// Result payload; its shape depends on the analysis type.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AnalysisResults {
    Heat(HeatResults),
    Vegetation(VegetationResults),
    Sustainability(SustainabilityResults),
    Mobility(MobilityResults),
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Demography and hydrology have no simulated results.
pub fn generate_results<R: Rng + ?Sized>(
    kind: AnalysisKind,
    rng: &mut R,
) -> Option<AnalysisResults> {
    let results = match kind {
        AnalysisKind::Heat => AnalysisResults::Heat(HeatResults {
            critical_areas: rng.gen_range(1..=5),
            avg_temperature: round_to(rng.gen_range(25.0..35.0), 1),
            recommendations: rng.gen_range(2..=9),
        }),
        AnalysisKind::Vegetation => AnalysisResults::Vegetation(VegetationResults {
            ndvi: round_to(rng.gen_range(0.3..0.8), 2),
            green_cover: rng.gen_range(10..=49),
            expansion_areas: rng.gen_range(1..=10),
        }),
        AnalysisKind::Sustainability => {
            let efficiency = match rng.gen_range(0..4) {
                0 => EnergyEfficiency::Low,
                1 => EnergyEfficiency::Medium,
                2 => EnergyEfficiency::Good,
                _ => EnergyEfficiency::Excellent,
            };
            AnalysisResults::Sustainability(SustainabilityResults {
                sustainability_index: round_to(rng.gen_range(5.0..10.0), 1),
                energy_efficiency: efficiency,
                improvements: rng.gen_range(5..=19),
            })
        }
        AnalysisKind::Mobility => AnalysisResults::Mobility(MobilityResults {
            accessibility: rng.gen_range(20..=99),
            traffic: rng.gen_range(0..=99),
            recommendations: rng.gen_range(2..=7),
        }),
        AnalysisKind::Demography | AnalysisKind::Hydrology => return None,
    };
    Some(results)
}
