use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{Report, ReportId, ReportStats};
use crate::modules::report::application::ports::incoming::use_cases::{
    GetReportUseCase, ListReportsError, ListReportsUseCase, ReportAccessError,
    ReportStatsUseCase,
};
use crate::modules::report::application::ports::outgoing::{ReportListFilter, ReportRepository};

use super::to_access_error;

pub struct ReportQueryService<R>
where
    R: ReportRepository,
{
    repository: R,
}

impl<R> ReportQueryService<R>
where
    R: ReportRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListReportsUseCase for ReportQueryService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        filter: ReportListFilter,
    ) -> Result<Vec<Report>, ListReportsError> {
        self.repository
            .list(owner, &filter)
            .await
            .map_err(|e| ListReportsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> GetReportUseCase for ReportQueryService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        report_id: ReportId,
    ) -> Result<Report, ReportAccessError> {
        self.repository
            .get(owner, report_id)
            .await
            .map_err(to_access_error)
    }
}

#[async_trait]
impl<R> ReportStatsUseCase for ReportQueryService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(&self, owner: &UserId) -> Result<ReportStats, ListReportsError> {
        let reports = self
            .repository
            .list(owner, &ReportListFilter::default())
            .await
            .map_err(|e| ListReportsError::QueryFailed(e.to_string()))?;

        Ok(ReportStats::tally(&reports, Utc::now()))
    }
}
