use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProjectsQuery {
    /// Only projects in this status
    pub status: Option<ProjectStatus>,
    /// Case-insensitive match on title, description, category or tags
    pub search: Option<String>,
}

impl From<GetProjectsQuery> for ProjectListFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectListFilter {
            status: q.status,
            search: q.search,
            category: None,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub count: usize,
    pub projects: Vec<Project>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Caller's projects in creation order", body = ProjectListResponse),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    user: AuthenticatedUser,
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: ProjectListFilter = query.into_inner().into();

    match data.project.get_list.execute(&user.user_id, filter).await {
        Ok(projects) => ApiResponse::success(ProjectListResponse {
            count: projects.len(),
            projects,
        }),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error("Error fetching projects")
        }
    }
}
