mod create_project;
mod delete_project;
mod get_project_stats;
mod get_projects;
mod get_projects_by_category;
mod get_single_project;
mod update_project;

pub use create_project::{
    __path_create_project_handler, create_project_handler, CreateProjectRequest, ProjectResponse,
};
pub use delete_project::{__path_delete_project_handler, delete_project_handler};
pub use get_project_stats::{
    __path_get_project_stats_handler, get_project_stats_handler, ProjectStatsResponse,
};
pub use get_projects::{__path_get_projects_handler, get_projects_handler, ProjectListResponse};
pub use get_projects_by_category::{
    __path_get_projects_by_category_handler, get_projects_by_category_handler,
    ProjectCategoryResponse,
};
pub use get_single_project::{__path_get_single_project_handler, get_single_project_handler};
pub use update_project::{
    __path_update_project_handler, update_project_handler, UpdateProjectRequest,
};
