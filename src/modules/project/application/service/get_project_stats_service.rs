use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectStats;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectStatsError, GetProjectStatsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetProjectStatsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectStatsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectStatsUseCase for GetProjectStatsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, owner: &UserId) -> Result<ProjectStats, GetProjectStatsError> {
        self.query
            .stats(owner)
            .await
            .map_err(|e| GetProjectStatsError::QueryFailed(e.to_string()))
    }
}
