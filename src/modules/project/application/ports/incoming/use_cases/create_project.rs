use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::CreateProjectData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Title, description and category are required")]
    MissingRequiredFields,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError>;
}
