use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::weather::CurrentWeather;
use crate::modules::environment::application::ports::outgoing::{WeatherError, WeatherProvider};

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,rain,wind_speed_10m";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: ForecastCurrent,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    #[serde(default)]
    rain: f64,
    wind_speed_10m: f64,
}

impl From<ForecastCurrent> for CurrentWeather {
    fn from(c: ForecastCurrent) -> Self {
        CurrentWeather {
            temperature: c.temperature_2m,
            relative_humidity: c.relative_humidity_2m,
            apparent_temperature: c.apparent_temperature,
            rain: c.rain,
            wind_speed: c.wind_speed_10m,
        }
    }
}

#[derive(Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current(&self, at: Coordinates) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", at.lat.to_string()),
                ("longitude", at.lng.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "America/Sao_Paulo".to_string()),
                ("forecast_days", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        debug!(lat = at.lat, lng = at.lng, "Fetched current weather");
        Ok(body.current.into())
    }
}
