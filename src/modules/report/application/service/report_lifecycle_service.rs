use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{Report, ReportId};
use crate::modules::report::application::domain::output::generate_output;
use crate::modules::report::application::ports::incoming::use_cases::{
    CancelReportUseCase, DeleteReportUseCase, FinalizeReportUseCase, ReportAccessError,
};
use crate::modules::report::application::ports::outgoing::ReportRepository;

use super::to_access_error;

/// Delete, finalize and cancel.
pub struct ReportLifecycleService<R>
where
    R: ReportRepository,
{
    repository: R,
}

impl<R> ReportLifecycleService<R>
where
    R: ReportRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// A running generation notices the deletion on its next tick and stops.
#[async_trait]
impl<R> DeleteReportUseCase for ReportLifecycleService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(&self, owner: &UserId, report_id: ReportId) -> Result<(), ReportAccessError> {
        self.repository
            .delete(owner, report_id)
            .await
            .map_err(to_access_error)?;

        info!(report_id = %report_id, owner = %owner, "Report deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> FinalizeReportUseCase for ReportLifecycleService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        report_id: ReportId,
    ) -> Result<Report, ReportAccessError> {
        let output = generate_output(&mut rand::thread_rng());
        let report = self
            .repository
            .finalize(owner, report_id, output)
            .await
            .map_err(to_access_error)?;

        info!(report_id = %report_id, "Draft report finalized");
        Ok(report)
    }
}

#[async_trait]
impl<R> CancelReportUseCase for ReportLifecycleService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(&self, owner: &UserId, report_id: ReportId) -> Result<(), ReportAccessError> {
        self.repository
            .cancel(owner, report_id)
            .await
            .map_err(to_access_error)?;

        info!(report_id = %report_id, owner = %owner, "Report generation cancelled");
        Ok(())
    }
}
