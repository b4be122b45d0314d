use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::ProjectStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProjectStatsResponse {
    pub stats: ProjectStats,
}

/// Project counters per status for the caller
#[utoipa::path(
    get,
    path = "/api/projects/stats",
    tag = "projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counters", body = ProjectStatsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/projects/stats")]
pub async fn get_project_stats_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.stats.execute(&user.user_id).await {
        Ok(stats) => ApiResponse::success(ProjectStatsResponse { stats }),
        Err(e) => {
            error!(user_id = %user.user_id, "Failed to compute project stats: {}", e);
            ApiResponse::internal_error("Error fetching projects")
        }
    }
}
