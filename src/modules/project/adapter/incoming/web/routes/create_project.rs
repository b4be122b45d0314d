use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{object_or_empty, Project};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateProjectRequest {
    #[schema(example = "Green corridor")]
    pub title: Option<String>,
    #[schema(example = "Street trees linking the two parks")]
    pub description: Option<String>,
    #[schema(example = "urban-greening")]
    pub category: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub location: Option<JsonValue>,
    #[schema(value_type = Option<Object>)]
    pub budget: Option<JsonValue>,
    #[schema(value_type = Option<Object>)]
    pub timeline: Option<JsonValue>,
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    pub project: Project,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Title, description or category missing", body = ErrorResponse,
            example = json!({"success": false, "message": "Title, description and category are required"})
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let project_data = CreateProjectData {
        owner: user.user_id.clone(),
        title: req.title.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        category: req.category.unwrap_or_default(),
        location: object_or_empty(req.location),
        budget: object_or_empty(req.budget),
        timeline: object_or_empty(req.timeline),
        tags: req.tags.unwrap_or_default(),
    };

    match data.project.create.execute(project_data).await {
        Ok(project) => {
            info!(project_id = %project.id, owner = %user.user_id, "Project created");
            ApiResponse::created("Project created successfully!", ProjectResponse { project })
        }

        Err(e @ CreateProjectError::MissingRequiredFields) => {
            warn!(owner = %user.user_id, "Project creation rejected: {}", e);
            ApiResponse::bad_request(&e.to_string())
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error("Error creating project")
        }
    }
}
