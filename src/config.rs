use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:5500,http://localhost:5500";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("Invalid {key} value: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for HasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "argon2" => Ok(HasherKind::Argon2),
            "bcrypt" => Ok(HasherKind::Bcrypt),
            other => Err(format!("unknown password hasher '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub open_meteo_url: String,
    pub ibge_url: String,
    pub nominatim_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub password_hasher: HasherKind,
    pub argon2: Argon2Settings,
    pub bcrypt_cost: u32,
    pub analysis_tick: Duration,
    pub report_tick: Duration,
    pub upstream: UpstreamSettings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the server settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let bcrypt_cost: u32 = load_or("BCRYPT_COST", 10)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST".to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            host: load_or("HOST", "0.0.0.0".to_string())?,
            port: load_or("PORT", 5000)?,
            environment,
            cors_origins,
            password_hasher: load_or("PASSWORD_HASHER", HasherKind::Argon2)?,
            argon2: Argon2Settings {
                memory_kib: load_or("ARGON2_MEMORY_KIB", 4 * 1024)?,
                iterations: load_or("ARGON2_ITERATIONS", 3)?,
                parallelism: load_or("ARGON2_PARALLELISM", 1)?,
            },
            bcrypt_cost,
            analysis_tick: load_tick("ANALYSIS_TICK_MS", 1000)?,
            report_tick: load_tick("REPORT_TICK_MS", 800)?,
            upstream: UpstreamSettings {
                open_meteo_url: load_or(
                    "OPEN_METEO_URL",
                    "https://api.open-meteo.com/v1/forecast".to_string(),
                )?,
                ibge_url: load_or(
                    "IBGE_URL",
                    "https://servicodados.ibge.gov.br/api/v1/localidades".to_string(),
                )?,
                nominatim_url: load_or(
                    "NOMINATIM_URL",
                    "https://nominatim.openstreetmap.org/search".to_string(),
                )?,
                timeout: Duration::from_secs(load_or("HTTP_TIMEOUT_SECS", 5)?),
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `key`, falling back to `default` when unset. A set but unparsable value is an error.
pub(crate) fn load_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }),
        Err(_) => {
            info!("{key} not set, using default");
            Ok(default)
        }
    }
}

/// Simulation tick in milliseconds; zero is rejected.
fn load_tick(key: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    match load_or(key, default_ms)? {
        0 => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        ms => Ok(Duration::from_millis(ms)),
    }
}

pub(crate) fn require(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))
}
