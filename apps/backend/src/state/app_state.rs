use sea_orm::DatabaseConnection;
use session_token::SecurityConfig;

use crate::error::AppError;

/// Shared, read-only resources handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch persistence)
    pub db: Option<DatabaseConnection>,
    /// Token signing and verification settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }

    /// The connection, or `DbUnavailable` when the state was built without one.
    pub fn db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::db_unavailable("database connection not configured"))
    }
}
