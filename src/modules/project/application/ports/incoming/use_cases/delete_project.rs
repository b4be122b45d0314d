use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Access denied to this project")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId, project_id: ProjectId)
        -> Result<(), DeleteProjectError>;
}
