use std::str::FromStr;

use super::{must_var, opt_var};
use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Which database engine the backend talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown BACKEND_DB_KIND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

impl DbKind {
    /// Read `BACKEND_DB_KIND`, defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        opt_var("BACKEND_DB_KIND")
            .map(|v| v.parse())
            .unwrap_or(Ok(DbKind::Postgres))
    }
}

/// Resolve the connection URL for `kind`. `DATABASE_URL` wins when set,
/// except for the in-memory engine which is always private to the process.
pub fn database_url(kind: DbKind, profile: DbProfile) -> Result<String, AppError> {
    match (kind, opt_var("DATABASE_URL")) {
        (DbKind::SqliteMemory, _) => Ok("sqlite::memory:".to_string()),
        (_, Some(url)) => Ok(url),
        (DbKind::Postgres, None) => db_url(profile),
        (DbKind::SqliteFile, None) => {
            let path = must_var("SQLITE_DB_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
    }
}

/// Builds a Postgres URL from environment variables based on profile
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    let host = opt_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = opt_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db_name = db_name(profile)?;
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}
