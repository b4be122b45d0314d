use async_trait::async_trait;

use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::locations::{BrazilState, City};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationError {
    #[error("Location request failed: {0}")]
    Request(String),

    #[error("Location service answered with status {0}")]
    Status(u16),

    #[error("Unreadable location payload: {0}")]
    Decode(String),
}

/// Brazilian administrative divisions and free-text geocoding.
#[async_trait]
pub trait LocationDirectory: Send + Sync {
    async fn states(&self) -> Result<Vec<BrazilState>, LocationError>;

    async fn cities(&self, state_id: u32) -> Result<Vec<City>, LocationError>;

    /// `Ok(None)` when the lookup succeeded but found nothing.
    async fn geocode(&self, city: &str, state: &str) -> Result<Option<Coordinates>, LocationError>;
}
