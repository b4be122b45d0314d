use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectId;
use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<(), DeleteProjectError> {
        self.project_repository
            .delete_project(owner, project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                ProjectRepositoryError::NotOwner => DeleteProjectError::Forbidden,
                ProjectRepositoryError::StoreError(msg) => DeleteProjectError::RepositoryError(msg),
                ProjectRepositoryError::BlankField(field) => DeleteProjectError::RepositoryError(
                    format!("unexpected blank {} while deleting project", field),
                ),
            })?;

        info!(project_id = %project_id, owner = %owner, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::Project;
    use crate::modules::project::application::ports::outgoing::{
        CreateProjectData, UpdateProjectData,
    };
    use mockall::{mock, predicate::*};

    mock! {
        pub ProjectRepo {}
        #[async_trait]
        impl ProjectRepository for ProjectRepo {
            async fn create_project(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;
            async fn update_project(&self, owner: &UserId, project_id: ProjectId, data: UpdateProjectData) -> Result<Project, ProjectRepositoryError>;
            async fn delete_project(&self, owner: &UserId, project_id: ProjectId) -> Result<(), ProjectRepositoryError>;
        }
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockProjectRepo::new();
        repo.expect_delete_project()
            .with(eq(UserId::from("1")), eq(ProjectId::new(3)))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = DeleteProjectService::new(repo);
        assert!(service
            .execute(&UserId::from("1"), ProjectId::new(3))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_foreign_project_is_forbidden() {
        let mut repo = MockProjectRepo::new();
        repo.expect_delete_project()
            .returning(|_, _| Err(ProjectRepositoryError::NotOwner));

        let service = DeleteProjectService::new(repo);
        let result = service.execute(&UserId::from("1"), ProjectId::new(3)).await;
        assert!(matches!(result, Err(DeleteProjectError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_missing_project_is_not_found() {
        let mut repo = MockProjectRepo::new();
        repo.expect_delete_project()
            .returning(|_, _| Err(ProjectRepositoryError::NotFound));

        let service = DeleteProjectService::new(repo);
        let result = service.execute(&UserId::from("1"), ProjectId::new(3)).await;
        assert!(matches!(result, Err(DeleteProjectError::NotFound)));
    }
}
