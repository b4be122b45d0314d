use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{
    Report, ReportFormat, ReportId, ReportKind, ReportPeriod, ReportStatus,
};
use crate::modules::report::application::domain::output::ReportOutput;

#[derive(Debug, Clone)]
pub struct NewReport {
    pub owner: UserId,
    pub kind: ReportKind,
    pub title: String,
    pub description: String,
    pub project: String,
    pub format: ReportFormat,
    pub language: String,
    /// `Generating` or `Draft`
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportListFilter {
    pub kind: Option<ReportKind>,
    pub status: Option<ReportStatus>,
    /// Case-insensitive, over title/description/project.
    pub search: Option<String>,
    pub period: Option<ReportPeriod>,
}

impl ReportListFilter {
    pub fn matches(&self, report: &Report, now: DateTime<Utc>) -> bool {
        if self.kind.is_some_and(|kind| report.kind != kind) {
            return false;
        }
        if self.status.is_some_and(|status| report.status != status) {
            return false;
        }
        if let Some(period) = self.period {
            if report.created_at < period.since(now) {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => report.matches_search(&needle.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportRepositoryError {
    #[error("Report not found")]
    NotFound,

    #[error("Report belongs to another user")]
    NotOwner,

    /// The transition is not allowed from the stored status.
    #[error("Report is {0}")]
    WrongStatus(ReportStatus),

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Assigns the next id, progress 0 and `createdAt`.
    async fn create(&self, data: NewReport) -> Result<Report, ReportRepositoryError>;

    async fn get(&self, owner: &UserId, report_id: ReportId)
        -> Result<Report, ReportRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        owner: &UserId,
        filter: &ReportListFilter,
    ) -> Result<Vec<Report>, ReportRepositoryError>;

    async fn delete(&self, owner: &UserId, report_id: ReportId)
        -> Result<(), ReportRepositoryError>;

    /// `draft` to `completed`; anything else is `WrongStatus`.
    async fn finalize(
        &self,
        owner: &UserId,
        report_id: ReportId,
        output: ReportOutput,
    ) -> Result<Report, ReportRepositoryError>;

    /// Removes a `generating` report; anything else is `WrongStatus`.
    async fn cancel(&self, owner: &UserId, report_id: ReportId)
        -> Result<(), ReportRepositoryError>;

    /// Background progress update. `NotFound` once the report is gone.
    async fn record_progress(
        &self,
        report_id: ReportId,
        progress: u8,
    ) -> Result<(), ReportRepositoryError>;

    /// Background completion of a `generating` report.
    async fn complete(
        &self,
        report_id: ReportId,
        output: ReportOutput,
    ) -> Result<Report, ReportRepositoryError>;
}
