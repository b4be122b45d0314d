pub mod analysis_repository;
pub mod analysis_scheduler;

pub use analysis_repository::{AnalysisRepository, AnalysisRepositoryError, NewAnalysis};
pub use analysis_scheduler::AnalysisScheduler;
