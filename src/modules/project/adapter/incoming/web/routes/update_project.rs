use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{ProjectId, ProjectStatus};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchField, UpdateProjectData,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_project::ProjectResponse;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Any subset of the editable fields. `id`, `createdBy` and `createdAt` are ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub location: PatchField<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub budget: PatchField<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub timeline: PatchField<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: PatchField<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<ProjectStatus>)]
    pub status: PatchField<ProjectStatus>,
}

impl From<UpdateProjectRequest> for UpdateProjectData {
    fn from(req: UpdateProjectRequest) -> Self {
        UpdateProjectData {
            title: req.title,
            description: req.description,
            category: req.category,
            location: req.location,
            budget: req.budget,
            timeline: req.timeline,
            tags: req.tags,
            status: req.status,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "A required field was blanked", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[put("/api/projects/{id:\\d+}")]
pub async fn update_project_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = ProjectId::new(path.into_inner());

    match data
        .project
        .update
        .execute(&user.user_id, project_id, req.into_inner().into())
        .await
    {
        Ok(project) => {
            info!(project_id = %project_id, "Project updated");
            ApiResponse::success_with_message(
                "Project updated successfully!",
                ProjectResponse { project },
            )
        }

        Err(e @ UpdateProjectError::BlankField(_)) => ApiResponse::bad_request(&e.to_string()),

        Err(UpdateProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(UpdateProjectError::Forbidden) => {
            warn!(project_id = %project_id, user_id = %user.user_id, "Denied update of foreign project");
            ApiResponse::forbidden("Access denied to this project")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Failed to update project {}: {}", project_id, e);
            ApiResponse::internal_error("Error updating project")
        }
    }
}
