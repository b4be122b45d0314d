use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{
    Report, ReportStatus, DEFAULT_LANGUAGE, DEFAULT_PROJECT,
};
use crate::modules::report::application::ports::incoming::use_cases::{
    CreateReportError, CreateReportInput, CreateReportUseCase,
};
use crate::modules::report::application::ports::outgoing::{
    NewReport, ReportRepository, ReportScheduler,
};

pub struct CreateReportService<R>
where
    R: ReportRepository,
{
    repository: R,
    scheduler: Arc<dyn ReportScheduler>,
}

impl<R> CreateReportService<R>
where
    R: ReportRepository,
{
    pub fn new(repository: R, scheduler: Arc<dyn ReportScheduler>) -> Self {
        Self {
            repository,
            scheduler,
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[async_trait]
impl<R> CreateReportUseCase for CreateReportService<R>
where
    R: ReportRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        input: CreateReportInput,
    ) -> Result<Report, CreateReportError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(CreateReportError::MissingTitle);
        }

        let status = if input.draft {
            ReportStatus::Draft
        } else {
            ReportStatus::Generating
        };

        let report = self
            .repository
            .create(NewReport {
                owner: owner.clone(),
                kind: input.kind,
                title,
                description: input.description.trim().to_string(),
                project: or_default(&input.project, DEFAULT_PROJECT),
                format: input.format,
                language: or_default(&input.language, DEFAULT_LANGUAGE),
                status,
            })
            .await
            .map_err(|e| CreateReportError::RepositoryError(e.to_string()))?;

        if report.status == ReportStatus::Generating {
            self.scheduler.schedule(&report);
            info!(report_id = %report.id, kind = ?report.kind, "Report generation started");
        } else {
            info!(report_id = %report.id, kind = ?report.kind, "Draft report saved");
        }

        Ok(report)
    }
}
