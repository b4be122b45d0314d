use chrono::Utc;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::modules::environment::application::domain::irradiance::{
    IrradianceSeries, PowerPayload,
};
use crate::modules::environment::application::domain::source::Sourced;
use crate::modules::environment::application::ports::incoming::use_cases::{
    IrradianceFilter, IrradianceReport, IrradianceUseCase,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct IrradianceService;

fn parse(payload: JsonValue) -> Result<IrradianceSeries, String> {
    let payload: PowerPayload = serde_json::from_value(payload).map_err(|e| e.to_string())?;
    IrradianceSeries::from_power(payload).map_err(|e| e.to_string())
}

impl IrradianceService {
    fn load(&self, payload: Option<JsonValue>) -> Sourced<IrradianceSeries> {
        let parsed = match payload {
            Some(payload) => parse(payload),
            None => Err("no payload".to_string()),
        };

        match parsed {
            Ok(series) => {
                debug!(months = series.months.len(), "Parsed POWER irradiance series");
                Sourced::live(series)
            }
            Err(reason) => {
                warn!(%reason, "Unusable POWER payload, using fallback irradiance");
                let today = Utc::now().date_naive();
                Sourced::fallback(IrradianceSeries::fallback(today, &mut rand::thread_rng()))
            }
        }
    }
}

impl IrradianceUseCase for IrradianceService {
    fn execute(&self, payload: Option<JsonValue>, filter: IrradianceFilter) -> IrradianceReport {
        let Sourced { value: series, source } = self.load(payload);

        let months = match filter {
            IrradianceFilter::All => series.months.clone(),
            IrradianceFilter::Latest => series.latest().cloned().into_iter().collect(),
            IrradianceFilter::Month { year, month } => {
                series.for_month(year, month).into_iter().cloned().collect()
            }
        };

        IrradianceReport {
            source,
            stats: series.stats(),
            metadata: series.metadata,
            months,
        }
    }
}
