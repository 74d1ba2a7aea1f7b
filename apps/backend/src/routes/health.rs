use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    migrations: usize,
    time: String,
}

/// Liveness plus a database round trip. An unreachable database renders as
/// a `DB_UNAVAILABLE` problem response.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.db()?;
    db.ping()
        .await
        .map_err(|e| AppError::db_unavailable(e.to_string()))?;
    let migrations = migration::count_applied_migrations(db)
        .await
        .map_err(|e| AppError::db_unavailable(e.to_string()))?;

    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: "ok",
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
