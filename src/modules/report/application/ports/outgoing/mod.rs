pub mod report_repository;
pub mod report_scheduler;

pub use report_repository::{
    NewReport, ReportListFilter, ReportRepository, ReportRepositoryError,
};
pub use report_scheduler::ReportScheduler;
