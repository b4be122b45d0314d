use crate::config::{load_or, require, ConfigError};

const MIN_SECRET_LENGTH: usize = 32;
// Ten years
const MAX_EXPIRY_SECONDS: i64 = 315_360_000;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = require("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters long", MIN_SECRET_LENGTH),
            });
        }

        // 30 days
        let access_token_expiry = check_expiry(load_or("JWT_EXPIRY", 2_592_000)?)?;

        let issuer = load_or("JWT_ISSUER", "EcoPlan".to_string())?;

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

fn check_expiry(seconds: i64) -> Result<i64, ConfigError> {
    if seconds <= 0 || seconds > MAX_EXPIRY_SECONDS {
        return Err(ConfigError::InvalidValue {
            key: "JWT_EXPIRY".to_string(),
            reason: format!(
                "must be between 1 and {} seconds",
                MAX_EXPIRY_SECONDS
            ),
        });
    }
    Ok(seconds)
}
