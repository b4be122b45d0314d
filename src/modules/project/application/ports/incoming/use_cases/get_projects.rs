use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, GetProjectsError>;
}
