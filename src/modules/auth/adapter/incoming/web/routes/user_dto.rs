use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{User, UserRole};

/// User as returned by register and login. Never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[schema(example = "1717171717171")]
    pub id: String,
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Souza")]
    pub last_name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: UserRole,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
        }
    }
}

/// `/api/auth/me` view: the public fields plus verification state.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: PublicUser,
    #[schema(example = true)]
    pub is_verified: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let is_verified = user.is_verified;
        Self {
            user: user.into(),
            is_verified,
        }
    }
}
