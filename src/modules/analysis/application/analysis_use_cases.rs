use std::sync::Arc;

use crate::modules::analysis::application::ports::incoming::use_cases::{
    CreateAnalysisUseCase, DeleteAnalysisUseCase, GetAnalysisUseCase, ListAnalysesUseCase,
};

#[derive(Clone)]
pub struct AnalysisUseCases {
    pub create: Arc<dyn CreateAnalysisUseCase + Send + Sync>,
    pub list: Arc<dyn ListAnalysesUseCase + Send + Sync>,
    pub get: Arc<dyn GetAnalysisUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAnalysisUseCase + Send + Sync>,
}
