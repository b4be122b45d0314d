use chrono::Utc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{User, UserId, UserRole};
use crate::auth::application::ports::outgoing::TokenProvider;

const TEST_SECRET: &str = "ecoplan_test_secret_key_for_testing_only";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: "EcoPlan".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Access token for `user_id`, signed with the test secret.
pub fn test_token(user_id: &str) -> String {
    test_token_provider()
        .generate_access_token(&UserId::from(user_id))
        .expect("test token must sign")
}

pub fn test_user(id: &str, email: &str) -> User {
    User {
        id: UserId::from(id),
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role: UserRole::User,
        is_verified: true,
        created_at: Utc::now(),
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
