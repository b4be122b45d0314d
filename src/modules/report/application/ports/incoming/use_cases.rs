use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{
    Report, ReportFormat, ReportId, ReportKind, ReportStats, ReportStatus,
};
use crate::modules::report::application::ports::outgoing::ReportListFilter;

#[derive(Debug, Clone)]
pub struct CreateReportInput {
    pub kind: ReportKind,
    pub title: String,
    pub description: String,
    /// Blank means the report spans several projects.
    pub project: String,
    pub format: ReportFormat,
    /// Blank means the default language.
    pub language: String,
    /// Store as `draft` instead of starting generation.
    pub draft: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateReportError {
    #[error("Report title is required")]
    MissingTitle,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListReportsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Shared by every operation on a single report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportAccessError {
    #[error("Report not found")]
    NotFound,

    #[error("Access denied to this report")]
    Forbidden,

    /// Finalize and cancel only; carries the status the report is in.
    #[error("Report is {0}")]
    WrongStatus(ReportStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Stores the report and, unless it is a draft, starts its background generation.
#[async_trait]
pub trait CreateReportUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        input: CreateReportInput,
    ) -> Result<Report, CreateReportError>;
}

/// Newest first.
#[async_trait]
pub trait ListReportsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        filter: ReportListFilter,
    ) -> Result<Vec<Report>, ListReportsError>;
}

#[async_trait]
pub trait GetReportUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId, report_id: ReportId)
        -> Result<Report, ReportAccessError>;
}

#[async_trait]
pub trait DeleteReportUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId, report_id: ReportId)
        -> Result<(), ReportAccessError>;
}

/// `draft` to `completed`, with freshly generated output.
#[async_trait]
pub trait FinalizeReportUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId, report_id: ReportId)
        -> Result<Report, ReportAccessError>;
}

/// Stops and removes a report that is still `generating`.
#[async_trait]
pub trait CancelReportUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId, report_id: ReportId)
        -> Result<(), ReportAccessError>;
}

#[async_trait]
pub trait ReportStatsUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId) -> Result<ReportStats, ListReportsError>;
}
