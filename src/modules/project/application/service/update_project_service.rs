use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectId};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        project_id: ProjectId,
        data: UpdateProjectData,
    ) -> Result<Project, UpdateProjectError> {
        self.project_repository
            .update_project(owner, project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::NotOwner => UpdateProjectError::Forbidden,
                ProjectRepositoryError::BlankField(field) => UpdateProjectError::BlankField(field),
                ProjectRepositoryError::StoreError(msg) => UpdateProjectError::RepositoryError(msg),
            })
    }
}
