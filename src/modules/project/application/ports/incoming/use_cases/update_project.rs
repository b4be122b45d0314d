use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectId};
use crate::modules::project::application::ports::outgoing::UpdateProjectData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    /// A required text field was sent blank or null.
    #[error("{0} cannot be empty")]
    BlankField(&'static str),

    #[error("Project not found")]
    NotFound,

    #[error("Access denied to this project")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        project_id: ProjectId,
        data: UpdateProjectData,
    ) -> Result<Project, UpdateProjectError>;
}
