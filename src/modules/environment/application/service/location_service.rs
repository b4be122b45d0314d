use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::environment::application::domain::locations::{
    collation_key, fallback_cities, fallback_states, state_center, BrazilState, City,
};
use crate::modules::environment::application::domain::source::{DataSource, Sourced};
use crate::modules::environment::application::ports::incoming::use_cases::{
    GeocodedPlace, LocationUseCase,
};
use crate::modules::environment::application::ports::outgoing::LocationDirectory;

pub struct LocationService {
    directory: Arc<dyn LocationDirectory>,
}

impl LocationService {
    pub fn new(directory: Arc<dyn LocationDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl LocationUseCase for LocationService {
    async fn states(&self) -> Sourced<Vec<BrazilState>> {
        let mut states = match self.directory.states().await {
            Ok(states) if !states.is_empty() => Sourced::live(states),
            Ok(_) => {
                warn!("State directory returned no states, using fallback list");
                Sourced::fallback(fallback_states())
            }
            Err(e) => {
                warn!(error = %e, "State directory failed, using fallback list");
                Sourced::fallback(fallback_states())
            }
        };
        states.value.sort_by_cached_key(|s| collation_key(&s.name));
        states
    }

    async fn cities(&self, state_id: u32) -> Sourced<Vec<City>> {
        let mut cities = match self.directory.cities(state_id).await {
            Ok(cities) if !cities.is_empty() => Sourced::live(cities),
            Ok(_) => {
                warn!(state_id, "No municipalities returned, using fallback list");
                Sourced::fallback(fallback_cities(state_id))
            }
            Err(e) => {
                warn!(state_id, error = %e, "Municipality lookup failed, using fallback list");
                Sourced::fallback(fallback_cities(state_id))
            }
        };
        cities.value.sort_by_cached_key(|c| collation_key(&c.name));
        cities
    }

    async fn geocode(&self, city: &str, state: &str) -> GeocodedPlace {
        match self.directory.geocode(city, state).await {
            Ok(Some(location)) => GeocodedPlace {
                location,
                source: DataSource::Live,
            },
            Ok(None) => {
                warn!(city, state, "City not found, using state centre");
                GeocodedPlace {
                    location: state_center(state),
                    source: DataSource::Fallback,
                }
            }
            Err(e) => {
                warn!(city, state, error = %e, "Geocoding failed, using state centre");
                GeocodedPlace {
                    location: state_center(state),
                    source: DataSource::Fallback,
                }
            }
        }
    }
}
