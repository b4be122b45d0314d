use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::{TimestampIdGenerator, User, UserRole};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

// ========================= Register Input =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterInputError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Registration data that already passed field validation.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl CreateUserInput {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterInputError> {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        let email = email.trim().to_lowercase();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty()
        {
            return Err(RegisterInputError::MissingFields);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterInputError::PasswordTooShort);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterInputError::InvalidEmail);
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Errors / Output =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("User already exists with this email")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user: User,
    pub token: String,
}

// ========================= Use case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    ids: Arc<TimestampIdGenerator>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            ids: Arc::new(TimestampIdGenerator::new()),
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        // Cheap early exit; the repository enforces uniqueness again on insert.
        let existing = self
            .query
            .find_by_email(input.email())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = User {
            id: self.ids.next_id(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
            role: UserRole::User,
            is_verified: true,
            created_at: chrono::Utc::now(),
        };

        let user = self
            .repository
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,
                UserRepositoryError::StoreError(msg) => CreateUserError::RepositoryError(msg),
            })?;

        let token = self
            .token_provider
            .generate_access_token(&user.id)
            .map_err(|e| CreateUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(CreateUserOutput { user, token })
    }
}
