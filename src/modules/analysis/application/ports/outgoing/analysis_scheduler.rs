use crate::modules::analysis::application::domain::entities::Analysis;

/// Drives a freshly created analysis to completion without blocking the caller.
pub trait AnalysisScheduler: Send + Sync {
    fn schedule(&self, analysis: &Analysis);
}
