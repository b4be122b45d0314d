use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::ProjectId;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[delete("/api/projects/{id:\\d+}")]
pub async fn delete_project_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = ProjectId::new(path.into_inner());

    match data.project.delete.execute(&user.user_id, project_id).await {
        Ok(()) => ApiResponse::message("Project deleted successfully!"),

        Err(DeleteProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(DeleteProjectError::Forbidden) => {
            warn!(project_id = %project_id, user_id = %user.user_id, "Denied delete of foreign project");
            ApiResponse::forbidden("Access denied to this project")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Failed to delete project {}: {}", project_id, e);
            ApiResponse::internal_error("Error deleting project")
        }
    }
}
