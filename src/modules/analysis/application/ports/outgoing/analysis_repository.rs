use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::{
    Analysis, AnalysisId, AnalysisKind, Priority,
};
use crate::modules::analysis::application::domain::results::AnalysisResults;

#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub owner: UserId,
    pub kind: AnalysisKind,
    pub name: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisRepositoryError {
    #[error("Analysis not found")]
    NotFound,

    #[error("Analysis belongs to another user")]
    NotOwner,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn create(&self, data: NewAnalysis) -> Result<Analysis, AnalysisRepositoryError>;

    async fn get(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<Analysis, AnalysisRepositoryError>;

    /// Newest first.
    async fn list(&self, owner: &UserId) -> Result<Vec<Analysis>, AnalysisRepositoryError>;

    async fn delete(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<(), AnalysisRepositoryError>;

    /// Background progress update. `NotFound` once the analysis was deleted.
    async fn record_progress(
        &self,
        analysis_id: AnalysisId,
        progress: u8,
    ) -> Result<(), AnalysisRepositoryError>;

    /// Marks the analysis completed with progress 100.
    async fn complete(
        &self,
        analysis_id: AnalysisId,
        results: Option<AnalysisResults>,
    ) -> Result<Analysis, AnalysisRepositoryError>;
}
