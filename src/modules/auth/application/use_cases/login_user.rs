use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - normalized
    password: String, // Private - non-empty
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email and password are required")]
    MissingCredentials,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() || password.is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub token: String,
    pub user: User,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(&user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse { token, user })
    }
}
