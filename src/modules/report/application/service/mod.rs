mod create_report_service;
mod report_lifecycle_service;
mod report_query_service;

pub use create_report_service::CreateReportService;
pub use report_lifecycle_service::ReportLifecycleService;
pub use report_query_service::ReportQueryService;

use crate::modules::report::application::ports::incoming::use_cases::ReportAccessError;
use crate::modules::report::application::ports::outgoing::ReportRepositoryError;

fn to_access_error(e: ReportRepositoryError) -> ReportAccessError {
    match e {
        ReportRepositoryError::NotFound => ReportAccessError::NotFound,
        ReportRepositoryError::NotOwner => ReportAccessError::Forbidden,
        ReportRepositoryError::WrongStatus(status) => ReportAccessError::WrongStatus(status),
        ReportRepositoryError::StoreError(msg) => ReportAccessError::RepositoryError(msg),
    }
}
