mod analysis_store_memory;
mod tokio_runner;

pub use analysis_store_memory::InMemoryAnalysisStore;
pub use tokio_runner::TokioAnalysisRunner;
