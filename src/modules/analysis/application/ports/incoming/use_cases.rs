use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::{
    Analysis, AnalysisId, AnalysisKind, Priority,
};

#[derive(Debug, Clone)]
pub struct CreateAnalysisInput {
    pub kind: AnalysisKind,
    pub name: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAnalysisError {
    #[error("Analysis name is required")]
    MissingName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAnalysesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Shared by reads and deletes of a single analysis.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisAccessError {
    #[error("Analysis not found")]
    NotFound,

    #[error("Access denied to this analysis")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Stores the analysis as `processing` and starts its background run.
#[async_trait]
pub trait CreateAnalysisUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        input: CreateAnalysisInput,
    ) -> Result<Analysis, CreateAnalysisError>;
}

/// Newest first.
#[async_trait]
pub trait ListAnalysesUseCase: Send + Sync {
    async fn execute(&self, owner: &UserId) -> Result<Vec<Analysis>, ListAnalysesError>;
}

#[async_trait]
pub trait GetAnalysisUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<Analysis, AnalysisAccessError>;
}

#[async_trait]
pub trait DeleteAnalysisUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<(), AnalysisAccessError>;
}
