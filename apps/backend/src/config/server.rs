use std::time::Duration;

use session_token::{SecurityConfig, DEFAULT_TOKEN_TTL};

use super::db::DbKind;
use super::{must_var, opt_var};
use crate::error::AppError;

/// Settings the backend binary reads once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = opt_var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match opt_var("BACKEND_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config("BACKEND_PORT must be a valid port number"))?,
            None => 3001,
        };

        Ok(Self {
            host,
            port,
            db_kind: DbKind::from_env()?,
            security: security_from_env()?,
        })
    }
}

/// Build the signing configuration from `BACKEND_JWT_SECRET` and
/// `BACKEND_JWT_TTL_SECS`.
pub fn security_from_env() -> Result<SecurityConfig, AppError> {
    let secret = must_var("BACKEND_JWT_SECRET")?;
    if secret.is_empty() {
        return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
    }

    let ttl = match opt_var("BACKEND_JWT_TTL_SECS") {
        Some(raw) => {
            let secs = raw.parse::<u64>().map_err(|_| {
                AppError::config("BACKEND_JWT_TTL_SECS must be a positive number of seconds")
            })?;
            if secs == 0 {
                return Err(AppError::config("BACKEND_JWT_TTL_SECS must be greater than zero"));
            }
            Duration::from_secs(secs)
        }
        None => DEFAULT_TOKEN_TTL,
    };

    Ok(SecurityConfig::new(secret.into_bytes()).with_ttl(ttl))
}
