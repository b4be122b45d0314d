use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::AnalysisId;
use crate::modules::analysis::application::ports::incoming::use_cases::{
    AnalysisAccessError, DeleteAnalysisUseCase,
};
use crate::modules::analysis::application::ports::outgoing::AnalysisRepository;

use super::to_access_error;

pub struct DeleteAnalysisService<R>
where
    R: AnalysisRepository,
{
    repository: R,
}

impl<R> DeleteAnalysisService<R>
where
    R: AnalysisRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// A running simulation notices the deletion on its next tick and stops.
#[async_trait]
impl<R> DeleteAnalysisUseCase for DeleteAnalysisService<R>
where
    R: AnalysisRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<(), AnalysisAccessError> {
        self.repository
            .delete(owner, analysis_id)
            .await
            .map_err(to_access_error)?;

        info!(analysis_id = %analysis_id, owner = %owner, "Analysis deleted");
        Ok(())
    }
}
