use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT payload issued at register/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: UserId,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: &UserId) -> Result<String, TokenError>;

    /// Checks signature, issuer, time window and token type.
    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
