mod analysis_query_service;
mod create_analysis_service;
mod delete_analysis_service;

pub use analysis_query_service::AnalysisQueryService;
pub use create_analysis_service::CreateAnalysisService;
pub use delete_analysis_service::DeleteAnalysisService;

use crate::modules::analysis::application::ports::incoming::use_cases::AnalysisAccessError;
use crate::modules::analysis::application::ports::outgoing::AnalysisRepositoryError;

fn to_access_error(e: AnalysisRepositoryError) -> AnalysisAccessError {
    match e {
        AnalysisRepositoryError::NotFound => AnalysisAccessError::NotFound,
        AnalysisRepositoryError::NotOwner => AnalysisAccessError::Forbidden,
        AnalysisRepositoryError::StoreError(msg) => AnalysisAccessError::RepositoryError(msg),
    }
}
