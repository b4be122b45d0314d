use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::new(4);
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert!(hashed_password.starts_with("$2"));

        assert!(hasher.verify_password(password, &hashed_password).await.unwrap());
        assert!(!hasher
            .verify_password("WrongPassword", &hashed_password)
            .await
            .unwrap());

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(verify_invalid_hash, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_bcrypt_rejects_out_of_range_cost() {
        let hasher = BcryptHasher::new(40);
        let result = hasher.hash_password("secret1").await;
        assert!(matches!(result, Err(HashError::HashFailed)));
    }
}
