use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{User, UserId},
    ports::outgoing::{UserQuery, UserQueryError},
};

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Result<User, FetchUserError>;
}

#[derive(Clone)]
pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: &UserId) -> Result<User, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| FetchUserError::UserNotFound(user_id.clone()))
    }
}
