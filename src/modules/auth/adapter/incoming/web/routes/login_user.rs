use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_dto::PublicUser;

/// Login request from client
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequestDto {
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,

    #[schema(example = "secret123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: PublicUser,
}

/// User login
///
/// Authenticates with email and password and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse,
            example = json!({"success": false, "message": "Email and password are required"})
        ),
        (status = 401, description = "Invalid credentials", body = ErrorResponse,
            example = json!({"success": false, "message": "Invalid credentials"})
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = match LoginRequest::new(
        req.email.unwrap_or_default(),
        req.password.unwrap_or_default(),
    ) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };
    let email = request.email().to_string();

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success_with_message(
                "Login successful!",
                LoginResponse {
                    token: response.token,
                    user: response.user.into(),
                },
            )
        }
        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Login failed: invalid credentials");
            ApiResponse::unauthorized("Invalid credentials")
        }
        Err(e) => {
            error!(email = %email, error = %e, "Login failed");
            ApiResponse::internal_error("Server error while logging in")
        }
    }
}
