use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::Analysis;
use crate::modules::analysis::application::ports::incoming::use_cases::{
    CreateAnalysisError, CreateAnalysisInput, CreateAnalysisUseCase,
};
use crate::modules::analysis::application::ports::outgoing::{
    AnalysisRepository, AnalysisScheduler, NewAnalysis,
};

pub struct CreateAnalysisService<R>
where
    R: AnalysisRepository,
{
    repository: R,
    scheduler: Arc<dyn AnalysisScheduler>,
}

impl<R> CreateAnalysisService<R>
where
    R: AnalysisRepository,
{
    pub fn new(repository: R, scheduler: Arc<dyn AnalysisScheduler>) -> Self {
        Self {
            repository,
            scheduler,
        }
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[async_trait]
impl<R> CreateAnalysisUseCase for CreateAnalysisService<R>
where
    R: AnalysisRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        input: CreateAnalysisInput,
    ) -> Result<Analysis, CreateAnalysisError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateAnalysisError::MissingName);
        }

        let analysis = self
            .repository
            .create(NewAnalysis {
                owner: owner.clone(),
                kind: input.kind,
                name,
                description: input.description.trim().to_string(),
                location: input.location.trim().to_string(),
                priority: input.priority,
                tags: clean_tags(input.tags),
            })
            .await
            .map_err(|e| CreateAnalysisError::RepositoryError(e.to_string()))?;

        self.scheduler.schedule(&analysis);
        info!(analysis_id = %analysis.id, kind = ?analysis.kind, "Analysis started");

        Ok(analysis)
    }
}
