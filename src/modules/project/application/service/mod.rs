mod create_project_service;
mod delete_project_service;
mod get_project_stats_service;
mod get_projects_service;
mod get_single_project_service;
mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_project_stats_service::GetProjectStatsService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use update_project_service::UpdateProjectService;
