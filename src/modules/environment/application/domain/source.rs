use serde::Serialize;
use utoipa::ToSchema;

/// Where a piece of environmental data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            source: DataSource::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: DataSource::Fallback,
        }
    }
}
