// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, UserQueryError>;

    /// `email` is expected to be normalized (trimmed, lowercase).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
}
