use std::sync::Arc;

use crate::modules::report::application::ports::incoming::use_cases::{
    CancelReportUseCase, CreateReportUseCase, DeleteReportUseCase, FinalizeReportUseCase,
    GetReportUseCase, ListReportsUseCase, ReportStatsUseCase,
};

#[derive(Clone)]
pub struct ReportUseCases {
    pub create: Arc<dyn CreateReportUseCase + Send + Sync>,
    pub list: Arc<dyn ListReportsUseCase + Send + Sync>,
    pub get: Arc<dyn GetReportUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReportUseCase + Send + Sync>,
    pub finalize: Arc<dyn FinalizeReportUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelReportUseCase + Send + Sync>,
    pub stats: Arc<dyn ReportStatsUseCase + Send + Sync>,
}
