use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const NO_TOKEN_MESSAGE: &str = "Access denied. No token provided.";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token.";
pub const UNKNOWN_USER_MESSAGE: &str = "Invalid token. User does not exist.";

/// Caller identity resolved from a valid bearer token whose subject still exists.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                error!("AppState is not registered; cannot authenticate request");
                create_api_error(ApiResponse::internal_error("Server error"))
            })?;

            let token =
                token.ok_or_else(|| create_api_error(ApiResponse::unauthorized(NO_TOKEN_MESSAGE)))?;

            let claims = state
                .token_provider
                .verify_access_token(&token)
                .map_err(|e| {
                    warn!(error = %e, "Rejected bearer token");
                    create_api_error(ApiResponse::unauthorized(INVALID_TOKEN_MESSAGE))
                })?;

            match state.user_query.find_by_id(&claims.sub).await {
                Ok(Some(user)) => Ok(AuthenticatedUser {
                    user_id: user.id,
                    role: user.role,
                }),
                Ok(None) => {
                    warn!(user_id = %claims.sub, "Token subject no longer exists");
                    Err(create_api_error(ApiResponse::unauthorized(
                        UNKNOWN_USER_MESSAGE,
                    )))
                }
                Err(e) => {
                    error!(error = %e, "User lookup failed during authentication");
                    Err(create_api_error(ApiResponse::internal_error("Server error")))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
