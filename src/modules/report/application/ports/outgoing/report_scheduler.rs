use crate::modules::report::application::domain::entities::Report;

/// Drives a `generating` report to completion without blocking the caller.
pub trait ReportScheduler: Send + Sync {
    fn schedule(&self, report: &Report);
}
