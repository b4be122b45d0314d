use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProjectCategoryResponse {
    pub count: usize,
    pub category: String,
    pub projects: Vec<Project>,
}

#[utoipa::path(
    get,
    path = "/api/projects/category/{category}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("category" = String, Path, description = "Exact category name")),
    responses(
        (status = 200, description = "Caller's projects in the category", body = ProjectCategoryResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/projects/category/{category}")]
pub async fn get_projects_by_category_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = path.into_inner();

    match data
        .project
        .get_list
        .execute(
            &user.user_id,
            ProjectListFilter::by_category(category.clone()),
        )
        .await
    {
        Ok(projects) => ApiResponse::success(ProjectCategoryResponse {
            count: projects.len(),
            category,
            projects,
        }),
        Err(e) => {
            error!(category = %category, "Failed to list projects by category: {}", e);
            ApiResponse::internal_error("Error fetching projects")
        }
    }
}
