use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectId};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<Project, GetSingleProjectError> {
        self.query
            .get_by_id(owner, project_id)
            .await
            .map_err(|e| match e {
                ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
                ProjectQueryError::NotOwner => GetSingleProjectError::Forbidden,
                ProjectQueryError::StoreError(msg) => GetSingleProjectError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::ProjectStats;
    use crate::modules::project::application::ports::outgoing::ProjectListFilter;

    #[derive(Clone)]
    struct MockProjectQuery {
        error: ProjectQueryError,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn get_by_id(
            &self,
            _owner: &UserId,
            _project_id: ProjectId,
        ) -> Result<Project, ProjectQueryError> {
            Err(self.error.clone())
        }

        async fn list(
            &self,
            _owner: &UserId,
            _filter: &ProjectListFilter,
        ) -> Result<Vec<Project>, ProjectQueryError> {
            unimplemented!("not needed for get_single_project tests")
        }

        async fn stats(&self, _owner: &UserId) -> Result<ProjectStats, ProjectQueryError> {
            unimplemented!("not needed for get_single_project tests")
        }
    }

    async fn run(error: ProjectQueryError) -> GetSingleProjectError {
        let service = GetSingleProjectService::new(MockProjectQuery { error });
        service
            .execute(&UserId::from("1"), ProjectId::new(9))
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        assert!(matches!(
            run(ProjectQueryError::NotFound).await,
            GetSingleProjectError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_not_owner_maps_to_forbidden() {
        assert!(matches!(
            run(ProjectQueryError::NotOwner).await,
            GetSingleProjectError::Forbidden
        ));
    }

    #[tokio::test]
    async fn test_store_error_maps_to_repository_error() {
        assert!(matches!(
            run(ProjectQueryError::StoreError("x".to_string())).await,
            GetSingleProjectError::RepositoryError(_)
        ));
    }
}
