mod report_store_memory;
mod tokio_runner;

pub use report_store_memory::InMemoryReportStore;
pub use tokio_runner::TokioReportRunner;
