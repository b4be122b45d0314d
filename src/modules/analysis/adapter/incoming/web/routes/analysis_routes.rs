use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::analysis::application::domain::entities::{
    Analysis, AnalysisId, AnalysisKind, Priority,
};
use crate::modules::analysis::application::ports::incoming::use_cases::{
    AnalysisAccessError, CreateAnalysisError, CreateAnalysisInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnalysisRequest {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    #[serde(default)]
    #[schema(example = "Heat islands downtown")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "Recife - PE")]
    pub location: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<CreateAnalysisRequest> for CreateAnalysisInput {
    fn from(req: CreateAnalysisRequest) -> Self {
        CreateAnalysisInput {
            kind: req.kind,
            name: req.name.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            location: req.location.unwrap_or_default(),
            priority: req.priority.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub analysis: Analysis,
}

#[derive(Serialize, ToSchema)]
pub struct AnalysisListResponse {
    pub count: usize,
    pub analyses: Vec<Analysis>,
}

fn access_error_response(e: AnalysisAccessError, id: AnalysisId, failure: &str) -> HttpResponse {
    match e {
        AnalysisAccessError::NotFound => ApiResponse::not_found("Analysis not found"),
        AnalysisAccessError::Forbidden => {
            warn!(analysis_id = %id, "Access to foreign analysis denied");
            ApiResponse::forbidden("Access denied to this analysis")
        }
        AnalysisAccessError::RepositoryError(msg) => {
            error!(analysis_id = %id, error = %msg, "{}", failure);
            ApiResponse::internal_error(failure)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Start a new analysis
///
/// Processing is simulated in the background; poll the analysis for progress.
#[utoipa::path(
    post,
    path = "/api/analyses",
    tag = "analyses",
    security(("bearer_auth" = [])),
    request_body = CreateAnalysisRequest,
    responses(
        (status = 201, description = "Analysis started", body = AnalysisResponse),
        (status = 400, description = "Missing name or unknown type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[post("/api/analyses")]
pub async fn create_analysis_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateAnalysisRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .analysis
        .create
        .execute(&user.user_id, req.into_inner().into())
        .await
    {
        Ok(analysis) => ApiResponse::created(
            "Analysis started successfully!",
            AnalysisResponse { analysis },
        ),
        Err(e @ CreateAnalysisError::MissingName) => ApiResponse::bad_request(&e.to_string()),
        Err(CreateAnalysisError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to create analysis: {}", msg);
            ApiResponse::internal_error("Error creating analysis")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analyses",
    tag = "analyses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's analyses, newest first", body = AnalysisListResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/analyses")]
pub async fn list_analyses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analysis.list.execute(&user.user_id).await {
        Ok(analyses) => ApiResponse::success(AnalysisListResponse {
            count: analyses.len(),
            analyses,
        }),
        Err(e) => {
            error!(user_id = %user.user_id, "Failed to list analyses: {}", e);
            ApiResponse::internal_error("Error fetching analyses")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analyses/{id}",
    tag = "analyses",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Analysis id")),
    responses(
        (status = 200, description = "Analysis with current progress", body = AnalysisResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Analysis not found", body = ErrorResponse),
    )
)]
#[get("/api/analyses/{id:\\d+}")]
pub async fn get_analysis_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = AnalysisId::new(path.into_inner());
    match data.analysis.get.execute(&user.user_id, id).await {
        Ok(analysis) => ApiResponse::success(AnalysisResponse { analysis }),
        Err(e) => access_error_response(e, id, "Error fetching analysis"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/analyses/{id}",
    tag = "analyses",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Analysis id")),
    responses(
        (status = 200, description = "Analysis deleted", body = MessageResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Analysis not found", body = ErrorResponse),
    )
)]
#[delete("/api/analyses/{id:\\d+}")]
pub async fn delete_analysis_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = AnalysisId::new(path.into_inner());
    match data.analysis.delete.execute(&user.user_id, id).await {
        Ok(()) => ApiResponse::message("Analysis deleted successfully!"),
        Err(e) => access_error_response(e, id, "Error deleting analysis"),
    }
}
