use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::domain::heat::cities_in;
use crate::modules::environment::application::domain::source::Sourced;
use crate::modules::environment::application::domain::weather::{
    fallback_weather, latitude_weather, WeatherSnapshot,
};
use crate::modules::environment::application::ports::incoming::use_cases::{
    CityWeather, GetWeatherUseCase,
};
use crate::modules::environment::application::ports::outgoing::WeatherProvider;

pub(crate) async fn current_or_fallback(
    provider: &dyn WeatherProvider,
    at: Coordinates,
) -> WeatherSnapshot {
    match provider.current(at).await {
        Ok(current) => Sourced::live(current).into(),
        Err(e) => {
            warn!(lat = at.lat, lng = at.lng, error = %e, "Weather provider failed, using fallback values");
            Sourced::fallback(fallback_weather(&mut rand::thread_rng())).into()
        }
    }
}

pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GetWeatherUseCase for WeatherService {
    async fn execute(&self, at: Coordinates) -> WeatherSnapshot {
        current_or_fallback(self.provider.as_ref(), at).await
    }

    async fn regional(&self, bounds: Bounds) -> Vec<CityWeather> {
        let cities = cities_in(&bounds);
        let lookups = cities.iter().map(|city| self.provider.current(city.location));
        let readings = join_all(lookups).await;

        let mut rng = rand::thread_rng();
        cities
            .into_iter()
            .zip(readings)
            .map(|(city, reading)| {
                let sourced = match reading {
                    Ok(current) => Sourced::live(current),
                    Err(e) => {
                        debug!(city = city.name, error = %e, "No live reading, estimating from latitude");
                        Sourced::fallback(latitude_weather(city.location.lat, &mut rng))
                    }
                };
                CityWeather {
                    city: city.name.to_string(),
                    location: city.location,
                    weather: sourced.into(),
                }
            })
            .collect()
    }
}
