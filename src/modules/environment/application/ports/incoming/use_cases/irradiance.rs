use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::modules::environment::application::domain::irradiance::{
    IrradianceMetadata, IrradianceStats, MonthlyIrradiance,
};
use crate::modules::environment::application::domain::source::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IrradianceFilter {
    #[default]
    All,
    /// Only the most recent month
    Latest,
    Month { year: i32, month: u32 },
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrradianceReport {
    pub source: DataSource,
    pub metadata: IrradianceMetadata,
    /// Over the whole series, regardless of the filter
    pub stats: Option<IrradianceStats>,
    pub months: Vec<MonthlyIrradiance>,
}

/// Never fails: a missing or malformed POWER payload yields the fallback series.
pub trait IrradianceUseCase: Send + Sync {
    fn execute(&self, payload: Option<JsonValue>, filter: IrradianceFilter) -> IrradianceReport;
}
