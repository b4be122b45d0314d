use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, mut data: CreateProjectData) -> Result<Project, CreateProjectError> {
        data.title = data.title.trim().to_string();
        data.description = data.description.trim().to_string();
        data.category = data.category.trim().to_string();

        if data.title.is_empty() || data.description.is_empty() || data.category.is_empty() {
            return Err(CreateProjectError::MissingRequiredFields);
        }

        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::StoreError(msg) => CreateProjectError::RepositoryError(msg),
                // Only updates and deletes produce the others
                other => {
                    CreateProjectError::RepositoryError(format!(
                        "unexpected '{}' while creating project",
                        other
                    ))
                }
            })
    }
}
