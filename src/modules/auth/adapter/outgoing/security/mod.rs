pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::config::{AppConfig, ConfigError, HasherKind};

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

/// Picks the hasher named by `PASSWORD_HASHER`.
pub fn password_hasher_from_config(
    config: &AppConfig,
) -> Result<Arc<dyn PasswordHasher>, ConfigError> {
    let hasher: Arc<dyn PasswordHasher> = match config.password_hasher {
        HasherKind::Argon2 => Arc::new(Argon2Hasher::from_settings(&config.argon2)?),
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new(config.bcrypt_cost)),
    };
    Ok(hasher)
}
