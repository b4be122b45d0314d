use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::modules::report::application::domain::entities::{Report, ReportId};
use crate::modules::report::application::domain::output::generate_output;
use crate::modules::report::application::ports::outgoing::{
    ReportRepository, ReportRepositoryError, ReportScheduler,
};
use crate::shared::progress::{ProgressStep, ProgressTracker};

/// Largest progress gained per tick.
const MAX_STEP: f64 = 15.0;

/// Simulates generation with one detached tokio task per report.
#[derive(Clone)]
pub struct TokioReportRunner {
    repository: Arc<dyn ReportRepository>,
    tick: Duration,
}

impl TokioReportRunner {
    pub fn new(repository: Arc<dyn ReportRepository>, tick: Duration) -> Self {
        Self { repository, tick }
    }
}

impl ReportScheduler for TokioReportRunner {
    fn schedule(&self, report: &Report) {
        let repository = Arc::clone(&self.repository);
        let (id, tick) = (report.id, self.tick);

        tokio::spawn(async move {
            run(repository, id, tick).await;
        });
    }
}

async fn run(repository: Arc<dyn ReportRepository>, id: ReportId, tick: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut tracker = ProgressTracker::default();
    let mut interval = tokio::time::interval(tick);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;

        match tracker.advance(rng.gen_range(0.0..MAX_STEP)) {
            ProgressStep::Running(progress) => match repository.record_progress(id, progress).await {
                Ok(()) => debug!(report_id = %id, progress, "Report progress"),
                Err(e @ (ReportRepositoryError::NotFound | ReportRepositoryError::WrongStatus(_))) => {
                    info!(report_id = %id, reason = %e, "Report no longer generating, stopping runner");
                    return;
                }
                Err(e) => {
                    error!(report_id = %id, error = %e, "Failed to record report progress");
                    return;
                }
            },
            ProgressStep::Done => {
                match repository.complete(id, generate_output(&mut rng)).await {
                    Ok(report) => info!(report_id = %id, pages = ?report.pages, "Report generated"),
                    Err(ReportRepositoryError::NotFound) => {
                        info!(report_id = %id, "Report removed before completion")
                    }
                    Err(e) => error!(report_id = %id, error = %e, "Failed to complete report"),
                }
                return;
            }
        }
    }
}
