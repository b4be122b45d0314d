use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::modules::analysis::application::domain::entities::{
    Analysis, AnalysisId, AnalysisKind,
};
use crate::modules::analysis::application::domain::results::generate_results;
use crate::modules::analysis::application::ports::outgoing::{
    AnalysisRepository, AnalysisRepositoryError, AnalysisScheduler,
};
use crate::shared::progress::{ProgressStep, ProgressTracker};

/// Largest progress gained per tick.
const MAX_STEP: f64 = 10.0;

/// Simulates processing with one detached tokio task per analysis.
#[derive(Clone)]
pub struct TokioAnalysisRunner {
    repository: Arc<dyn AnalysisRepository>,
    tick: Duration,
}

impl TokioAnalysisRunner {
    pub fn new(repository: Arc<dyn AnalysisRepository>, tick: Duration) -> Self {
        Self { repository, tick }
    }
}

impl AnalysisScheduler for TokioAnalysisRunner {
    fn schedule(&self, analysis: &Analysis) {
        let repository = Arc::clone(&self.repository);
        let (id, kind, tick) = (analysis.id, analysis.kind, self.tick);

        tokio::spawn(async move {
            run(repository, id, kind, tick).await;
        });
    }
}

async fn run(
    repository: Arc<dyn AnalysisRepository>,
    id: AnalysisId,
    kind: AnalysisKind,
    tick: Duration,
) {
    let mut rng = StdRng::from_entropy();
    let mut tracker = ProgressTracker::default();
    let mut interval = tokio::time::interval(tick);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;

        match tracker.advance(rng.gen_range(0.0..MAX_STEP)) {
            ProgressStep::Running(progress) => {
                match repository.record_progress(id, progress).await {
                    Ok(()) => debug!(analysis_id = %id, progress, "Analysis progress"),
                    Err(AnalysisRepositoryError::NotFound) => {
                        info!(analysis_id = %id, "Analysis removed, stopping runner");
                        return;
                    }
                    Err(e) => {
                        error!(analysis_id = %id, error = %e, "Failed to record progress");
                        return;
                    }
                }
            }
            ProgressStep::Done => {
                let results = generate_results(kind, &mut rng);
                match repository.complete(id, results).await {
                    Ok(_) => info!(analysis_id = %id, "Analysis completed"),
                    Err(AnalysisRepositoryError::NotFound) => {
                        info!(analysis_id = %id, "Analysis removed before completion")
                    }
                    Err(e) => error!(analysis_id = %id, error = %e, "Failed to complete analysis"),
                }
                return;
            }
        }
    }
}
