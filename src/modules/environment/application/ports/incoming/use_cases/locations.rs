use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::locations::{BrazilState, City};
use crate::modules::environment::application::domain::source::{DataSource, Sourced};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GeocodedPlace {
    #[serde(flatten)]
    pub location: Coordinates,
    pub source: DataSource,
}

/// Every operation falls back to built-in data, so none of them fail.
#[async_trait]
pub trait LocationUseCase: Send + Sync {
    /// Sorted by name
    async fn states(&self) -> Sourced<Vec<BrazilState>>;

    /// Sorted by name
    async fn cities(&self, state_id: u32) -> Sourced<Vec<City>>;

    async fn geocode(&self, city: &str, state: &str) -> GeocodedPlace;
}
