use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user; fails with `EmailAlreadyExists` when the email is taken.
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;
}
