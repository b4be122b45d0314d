mod analysis_routes;

pub use analysis_routes::{
    __path_create_analysis_handler, __path_delete_analysis_handler, __path_get_analysis_handler,
    __path_list_analyses_handler, create_analysis_handler, delete_analysis_handler,
    get_analysis_handler, list_analyses_handler, AnalysisListResponse, AnalysisResponse,
    CreateAnalysisRequest,
};
