use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::ProjectId;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_project::ProjectResponse;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id:\\d+}")]
pub async fn get_single_project_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = ProjectId::new(path.into_inner());

    match data
        .project
        .get_single
        .execute(&user.user_id, project_id)
        .await
    {
        Ok(project) => ApiResponse::success(ProjectResponse { project }),

        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(GetSingleProjectError::Forbidden) => {
            warn!(project_id = %project_id, user_id = %user.user_id, "Denied access to foreign project");
            ApiResponse::forbidden("Access denied to this project")
        }

        Err(GetSingleProjectError::RepositoryError(e)) => {
            error!("Failed to fetch project {}: {}", project_id, e);
            ApiResponse::internal_error("Error fetching project")
        }
    }
}
