use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

/// Process-lifetime user table. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for wiring tests without going through registration.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, UserQueryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        users.push(user.clone());
        tracing::debug!(user_id = %user.id, total = users.len(), "User stored");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use chrono::Utc;

    fn user(id: &str, email: &str) -> User {
        User {
            id: UserId::from(id),
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let store = InMemoryUserStore::new();
        store.create_user(user("1", "ana@example.com")).await.unwrap();

        let by_id = store.find_by_id(&UserId::from("1")).await.unwrap();
        assert_eq!(by_id.unwrap().email, "ana@example.com");

        let by_email = store.find_by_email("ana@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id.value(), "1");

        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.create_user(user("1", "ana@example.com")).await.unwrap();

        let result = store.create_user(user("2", "ana@example.com")).await;
        assert!(matches!(result, Err(UserRepositoryError::EmailAlreadyExists)));
        assert!(store.find_by_id(&UserId::from("2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryUserStore::new();
        let other = store.clone();
        store.create_user(user("1", "ana@example.com")).await.unwrap();

        assert!(other.find_by_id(&UserId::from("1")).await.unwrap().is_some());
    }
}
