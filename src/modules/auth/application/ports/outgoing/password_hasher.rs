use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// The stored hash could not be parsed; a plain mismatch is `Ok(false)`.
    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Produces the self-describing string kept in `User::password_hash`
/// (PHC for argon2, `$2b$` for bcrypt). Both calls run on the blocking pool.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, HashError>;
}
