use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::modules::report::application::domain::entities::{Report, ReportId, ReportStatus};
use crate::modules::report::application::domain::output::ReportOutput;
use crate::modules::report::application::ports::outgoing::{
    NewReport, ReportListFilter, ReportRepository, ReportRepositoryError,
};
use crate::shared::progress::MAX_RUNNING_PROGRESS;

#[derive(Debug, Default)]
struct ReportTable {
    next_id: u64,
    rows: BTreeMap<ReportId, Report>,
}

impl ReportTable {
    fn owned(&self, owner: &UserId, report_id: ReportId) -> Result<&Report, ReportRepositoryError> {
        let report = self
            .rows
            .get(&report_id)
            .ok_or(ReportRepositoryError::NotFound)?;
        if !report.is_owned_by(owner) {
            return Err(ReportRepositoryError::NotOwner);
        }
        Ok(report)
    }

    fn owned_mut(
        &mut self,
        owner: &UserId,
        report_id: ReportId,
    ) -> Result<&mut Report, ReportRepositoryError> {
        let report = self
            .rows
            .get_mut(&report_id)
            .ok_or(ReportRepositoryError::NotFound)?;
        if !report.is_owned_by(owner) {
            return Err(ReportRepositoryError::NotOwner);
        }
        Ok(report)
    }

    fn generating_mut(&mut self, report_id: ReportId) -> Result<&mut Report, ReportRepositoryError> {
        let report = self
            .rows
            .get_mut(&report_id)
            .ok_or(ReportRepositoryError::NotFound)?;
        match report.status {
            ReportStatus::Generating => Ok(report),
            other => Err(ReportRepositoryError::WrongStatus(other)),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryReportStore {
    table: Arc<RwLock<ReportTable>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportStore {
    async fn create(&self, data: NewReport) -> Result<Report, ReportRepositoryError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = ReportId::new(table.next_id);

        let report = Report {
            id,
            kind: data.kind,
            title: data.title,
            description: data.description,
            project: data.project,
            status: data.status,
            progress: 0,
            format: data.format,
            language: data.language,
            pages: None,
            charts: None,
            file_size: None,
            created_by: data.owner,
            created_at: Utc::now(),
            completed_at: None,
        };

        table.rows.insert(id, report.clone());
        Ok(report)
    }

    async fn get(&self, owner: &UserId, report_id: ReportId) -> Result<Report, ReportRepositoryError> {
        let table = self.table.read().await;
        table.owned(owner, report_id).cloned()
    }

    async fn list(
        &self,
        owner: &UserId,
        filter: &ReportListFilter,
    ) -> Result<Vec<Report>, ReportRepositoryError> {
        let now = Utc::now();
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|r| r.is_owned_by(owner) && filter.matches(r, now))
            .cloned()
            .collect())
    }

    async fn delete(&self, owner: &UserId, report_id: ReportId) -> Result<(), ReportRepositoryError> {
        let mut table = self.table.write().await;
        table.owned(owner, report_id)?;
        table.rows.remove(&report_id);
        Ok(())
    }

    async fn finalize(
        &self,
        owner: &UserId,
        report_id: ReportId,
        output: ReportOutput,
    ) -> Result<Report, ReportRepositoryError> {
        let mut table = self.table.write().await;
        let report = table.owned_mut(owner, report_id)?;
        if report.status != ReportStatus::Draft {
            return Err(ReportRepositoryError::WrongStatus(report.status));
        }

        report.finish(output, Utc::now());
        Ok(report.clone())
    }

    async fn cancel(&self, owner: &UserId, report_id: ReportId) -> Result<(), ReportRepositoryError> {
        let mut table = self.table.write().await;
        let report = table.owned_mut(owner, report_id)?;
        if report.status != ReportStatus::Generating {
            return Err(ReportRepositoryError::WrongStatus(report.status));
        }

        table.rows.remove(&report_id);
        Ok(())
    }

    async fn record_progress(
        &self,
        report_id: ReportId,
        progress: u8,
    ) -> Result<(), ReportRepositoryError> {
        let mut table = self.table.write().await;
        let report = table.generating_mut(report_id)?;
        report.progress = progress.min(MAX_RUNNING_PROGRESS);
        Ok(())
    }

    async fn complete(
        &self,
        report_id: ReportId,
        output: ReportOutput,
    ) -> Result<Report, ReportRepositoryError> {
        let mut table = self.table.write().await;
        let report = table.generating_mut(report_id)?;
        report.finish(output, Utc::now());
        Ok(report.clone())
    }
}
