use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::source::{DataSource, Sourced};

/// Current conditions at a point, in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: f64,
    pub relative_humidity: f64,
    pub apparent_temperature: f64,
    pub rain: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature > 30.0 {
            TemperatureBand::Hot
        } else if temperature > 25.0 {
            TemperatureBand::Warm
        } else if temperature > 20.0 {
            TemperatureBand::Mild
        } else if temperature > 15.0 {
            TemperatureBand::Cool
        } else {
            TemperatureBand::Cold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    #[serde(flatten)]
    pub current: CurrentWeather,
    pub band: TemperatureBand,
    #[schema(value_type = String, example = "clear sky")]
    pub description: &'static str,
    pub source: DataSource,
}

impl From<Sourced<CurrentWeather>> for WeatherSnapshot {
    fn from(sourced: Sourced<CurrentWeather>) -> Self {
        Self {
            band: TemperatureBand::from_celsius(sourced.value.temperature),
            description: describe(&sourced.value),
            current: sourced.value,
            source: sourced.source,
        }
    }
}

/// Short condition label, driven by rainfall in mm.
pub fn describe(weather: &CurrentWeather) -> &'static str {
    if weather.rain >= 2.5 {
        "rain"
    } else if weather.rain > 0.0 {
        "light rain"
    } else {
        "clear sky"
    }
}

/// Plausible Brazilian averages used when the forecast provider is unreachable.
pub fn fallback_weather<R: Rng + ?Sized>(rng: &mut R) -> CurrentWeather {
    CurrentWeather {
        temperature: rng.gen_range(25.0..35.0),
        relative_humidity: rng.gen_range(60.0..90.0),
        apparent_temperature: rng.gen_range(26.0..38.0),
        rain: rng.gen_range(0.0..5.0),
        wind_speed: rng.gen_range(2.0..10.0),
    }
}

/// Dry-weather guess for a city marker: 20 + 10·sin(lat) °C give or take 4 °C,
/// rounded, with the apparent temperature two degrees above it.
pub fn latitude_weather<R: Rng + ?Sized>(lat: f64, rng: &mut R) -> CurrentWeather {
    let temperature = (20.0 + lat.sin() * 10.0 + rng.gen_range(-4.0..4.0)).round();
    CurrentWeather {
        temperature,
        relative_humidity: rng.gen_range(40.0..80.0),
        apparent_temperature: temperature + 2.0,
        rain: 0.0,
        wind_speed: rng.gen_range(1.0..6.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(TemperatureBand::from_celsius(15.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_celsius(15.1), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::from_celsius(20.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::from_celsius(25.0), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(30.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_celsius(30.5), TemperatureBand::Hot);
    }

    #[test]
    fn test_fallback_weather_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = fallback_weather(&mut rng);
            assert!((25.0..35.0).contains(&w.temperature));
            assert!((60.0..90.0).contains(&w.relative_humidity));
            assert!((26.0..38.0).contains(&w.apparent_temperature));
            assert!((0.0..5.0).contains(&w.rain));
            assert!((2.0..10.0).contains(&w.wind_speed));
        }
    }

    #[test]
    fn test_latitude_weather_follows_latitude() {
        let mut rng = StdRng::seed_from_u64(11);
        for lat in [-23.5505, -3.119, 0.0, -30.0346] {
            let base = 20.0 + f64::sin(lat) * 10.0;
            for _ in 0..50 {
                let w = latitude_weather(lat, &mut rng);
                assert_eq!(w.temperature, w.temperature.round());
                assert!((w.temperature - base).abs() <= 4.5);
                assert_eq!(w.apparent_temperature, w.temperature + 2.0);
                assert!((40.0..80.0).contains(&w.relative_humidity));
                assert_eq!(w.rain, 0.0);
            }
        }
    }

    #[test]
    fn test_description_follows_rain() {
        let mut w = fallback_weather(&mut StdRng::seed_from_u64(3));
        w.rain = 0.0;
        assert_eq!(describe(&w), "clear sky");
        w.rain = 0.4;
        assert_eq!(describe(&w), "light rain");
        w.rain = 6.0;
        assert_eq!(describe(&w), "rain");
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let snapshot: WeatherSnapshot = Sourced::fallback(CurrentWeather {
            temperature: 31.0,
            relative_humidity: 70.0,
            apparent_temperature: 34.0,
            rain: 0.0,
            wind_speed: 3.0,
        })
        .into();

        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(value["temperature"], 31.0);
        assert_eq!(value["relativeHumidity"], 70.0);
        assert_eq!(value["band"], "hot");
        assert_eq!(value["description"], "clear sky");
        assert_eq!(value["source"], "fallback");
    }
}
