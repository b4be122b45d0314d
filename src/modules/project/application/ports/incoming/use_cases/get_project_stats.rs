use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectStatsUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId) -> Result<ProjectStats, GetProjectStatsError>;
}
