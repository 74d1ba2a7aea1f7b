use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{database_url, DbKind, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn engine_name(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry `connect_fn` at a fixed interval; returns the last error when all
/// attempts fail.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a pool for `url`. This function does NOT run any migrations.
pub async fn connect_db(url: &str, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(url.to_string());
    options.sqlx_logging(false);

    // every connection to sqlite::memory: is a separate database
    if kind == DbKind::SqliteMemory {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(5));
    }

    let attempts = if kind == DbKind::Postgres {
        CONNECT_ATTEMPTS
    } else {
        1
    };

    retry_connection(
        || {
            let options = options.clone();
            async move {
                Database::connect(options)
                    .await
                    .map_err(|e| AppError::db_unavailable(e.to_string()))
            }
        },
        attempts,
        CONNECT_INTERVAL_MS,
    )
    .await
}

/// Connect and bring the schema up to date. Single entrypoint used by
/// `StateBuilder` in production and in tests.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
) -> Result<DatabaseConnection, AppError> {
    let url = database_url(kind, profile)?;
    let conn = connect_db(&url, kind).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!(engine = engine_name(kind), profile = ?profile, "database ready");
    Ok(conn)
}
