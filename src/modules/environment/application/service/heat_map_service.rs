use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::domain::heat::{
    cities_in, city_heat_points, generate_heat_map, smart_fallback, MIN_REGIONAL_POINTS,
};
use crate::modules::environment::application::ports::incoming::use_cases::{
    GetHeatMapUseCase, HeatMap, RegionalHeat,
};
use crate::modules::environment::application::ports::outgoing::WeatherProvider;

use super::weather_service::current_or_fallback;

pub struct HeatMapService {
    weather: Arc<dyn WeatherProvider>,
}

impl HeatMapService {
    pub fn new(weather: Arc<dyn WeatherProvider>) -> Self {
        Self { weather }
    }
}

#[async_trait]
impl GetHeatMapUseCase for HeatMapService {
    async fn around(&self, center: Coordinates) -> HeatMap {
        let weather = current_or_fallback(self.weather.as_ref(), center).await;
        let points = generate_heat_map(center, &weather.current, &mut rand::thread_rng());

        HeatMap {
            center,
            weather,
            points,
        }
    }

    async fn regional(&self, bounds: Bounds) -> RegionalHeat {
        let cities = cities_in(&bounds);
        let lookups = cities
            .iter()
            .map(|city| current_or_fallback(self.weather.as_ref(), city.location));
        let readings = join_all(lookups).await;

        let mut rng = rand::thread_rng();
        let mut points = Vec::new();
        for (city, reading) in cities.iter().zip(&readings) {
            debug!(city = city.name, temperature = reading.current.temperature, "Regional reading");
            points.extend(city_heat_points(
                city.location,
                reading.current.temperature,
                &mut rng,
            ));
        }

        let fallback_used = points.len() < MIN_REGIONAL_POINTS;
        if fallback_used {
            warn!(
                cities = cities.len(),
                points = points.len(),
                "Too few regional readings, adding synthetic heat-island pattern"
            );
            points.extend(smart_fallback(&bounds, &mut rng));
        }

        RegionalHeat {
            cities_sampled: cities.len(),
            fallback_used,
            points,
        }
    }
}
