use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::user_dto::UserProfile;

#[derive(Serialize, ToSchema)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = MeResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_me_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_user_profile_use_case
        .execute(&user.user_id)
        .await
    {
        Ok(profile) => ApiResponse::success(MeResponse {
            user: profile.into(),
        }),
        Err(FetchUserError::UserNotFound(_)) => ApiResponse::not_found("User not found"),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch current user");
            ApiResponse::internal_error("Error fetching user data")
        }
    }
}
