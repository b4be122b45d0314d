use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_dto::PublicUser;

/// Request body for user registration
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    #[schema(example = "Ana")]
    pub first_name: Option<String>,

    #[schema(example = "Souza")]
    pub last_name: Option<String>,

    #[schema(example = "ana@example.com")]
    pub email: Option<String>,

    /// At least 6 characters
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// Bearer token for subsequent requests
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: PublicUser,
}

fn map_create_user_error(err: CreateUserError, email: &str) -> HttpResponse {
    match &err {
        CreateUserError::EmailAlreadyExists => {
            warn!(email = %email, "User already exists");
            ApiResponse::bad_request(&err.to_string())
        }
        other => {
            error!(email = %email, error = %other, "User registration failed");
            ApiResponse::internal_error("Server error while registering user")
        }
    }
}

/// Register a new user
///
/// Creates the account and returns a bearer token so the client is signed in right away.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterUserResponse,
            example = json!({
                "success": true,
                "message": "User registered successfully!",
                "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                "user": {
                    "id": "1717171717171",
                    "firstName": "Ana",
                    "lastName": "Souza",
                    "email": "ana@example.com",
                    "role": "user"
                }
            })
        ),
        (status = 400, description = "Validation error or email already registered", body = ErrorResponse,
            example = json!({"success": false, "message": "User already exists with this email"})
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone().unwrap_or_default();

    info!(email = %email, "User registration attempt");

    let input = match CreateUserInput::new(
        req.first_name.unwrap_or_default(),
        req.last_name.unwrap_or_default(),
        email.clone(),
        req.password.unwrap_or_default(),
    ) {
        Ok(input) => input,
        Err(e) => {
            warn!(email = %email, error = %e, "Invalid registration input");
            return ApiResponse::bad_request(&e.to_string());
        }
    };

    match data.create_user_use_case.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User registered");
            ApiResponse::created(
                "User registered successfully!",
                RegisterUserResponse {
                    token: output.token,
                    user: output.user.into(),
                },
            )
        }
        Err(e) => map_create_user_error(e, &email),
    }
}
