use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

use super::results::AnalysisResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(u64);

impl AnalysisId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Heat,
    Vegetation,
    Sustainability,
    Mobility,
    Demography,
    Hydrology,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Processing,
    Completed,
}

/// An environmental study whose processing is simulated in the background.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[schema(value_type = u64, example = 1)]
    pub id: AnalysisId,
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    #[schema(example = "Heat islands in Recife downtown")]
    pub name: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub status: AnalysisStatus,
    /// 0 to 100
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResults>,
    #[schema(value_type = String)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Analysis {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }
}
