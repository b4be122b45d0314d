mod report_routes;

pub use report_routes::{
    __path_cancel_report_handler, __path_create_report_handler, __path_delete_report_handler,
    __path_finalize_report_handler, __path_get_report_handler, __path_list_reports_handler,
    __path_report_stats_handler, cancel_report_handler, create_report_handler,
    delete_report_handler, finalize_report_handler, get_report_handler, list_reports_handler,
    report_stats_handler, CreateReportRequest, ReportListQuery, ReportListResponse, ReportResponse,
    ReportStatsResponse,
};
