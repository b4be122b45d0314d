use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery,
};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, GetProjectsError> {
        self.query
            .list(owner, &filter)
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}
