//! Unit-test fixtures: a migrated in-memory database and seeded users.

use sea_orm::DatabaseConnection;

use crate::auth::Identity;
use crate::config::db::DbKind;
use crate::infra::db::connect_db;
use crate::repos::users::{self, User};

/// Fresh in-memory SQLite with the full schema applied.
pub async fn sqlite_db() -> DatabaseConnection {
    let conn = connect_db("sqlite::memory:", DbKind::SqliteMemory)
        .await
        .expect("sqlite memory connection");
    migration::migrate(&conn, migration::MigrationCommand::Up)
        .await
        .expect("migrations apply");
    conn
}

/// Insert a user directly, bypassing signup validation and hashing.
pub async fn seed_user(conn: &DatabaseConnection, username: &str) -> User {
    users::create_user(
        conn,
        username,
        &format!("{username}@example.test"),
        "not-a-real-hash",
    )
    .await
    .expect("seed user")
}

/// Identity for `user` as if it came from a verified token.
pub fn identity_for(user: &User) -> Identity {
    Identity {
        claims: session_token::Claims::new(user.id.as_str(), user.username.as_str(), 0, i64::MAX),
        token: "test-token".to_string(),
    }
}
