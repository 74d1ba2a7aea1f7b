use std::time::SystemTime;

use sea_orm::{ConnectionTrait, TransactionTrait};
use session_token::SecurityConfig;
use tracing::{debug, info};

use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::{self, User};

const MIN_PASSWORD_CHARS: usize = 5;

/// A freshly issued token and the user it speaks for.
#[derive(Debug, Clone)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Signup input as received from the client.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn validate_new_user(input: &NewUser) -> Result<(String, String), AppError> {
    let username = input.username.trim();
    if username.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidUsername,
            "Username is required",
        ));
    }

    let email = normalize_email(&input.email);
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "Must match an email address",
        ));
    }

    if input.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("Password must be at least {MIN_PASSWORD_CHARS} characters"),
        ));
    }

    Ok((username.to_string(), email))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create an account and sign the caller in. The user row is only
/// committed once a token has been minted for it.
pub async fn signup<C: ConnectionTrait + TransactionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    now: SystemTime,
    input: NewUser,
) -> Result<AuthPayload, AppError> {
    let (username, email) = validate_new_user(&input)?;

    if users::find_user_by_username(conn, &username).await?.is_some() {
        return Err(AppError::conflict(
            ErrorCode::UniqueUsername,
            "Username already taken",
        ));
    }
    if users::find_user_by_email(conn, &email).await?.is_some() {
        return Err(AppError::conflict(
            ErrorCode::UniqueEmail,
            "Email already registered",
        ));
    }

    let password_hash = hash_password(&input.password)?;
    let txn = conn.begin().await?;
    // a concurrent signup can still lose the race; the unique index maps to Conflict
    let user = users::create_user(&txn, &username, &email, &password_hash).await?;
    let token = mint_access_token(&user.id, &user.username, now, security)?;
    txn.commit().await?;

    info!(user_id = %user.id, email = %Redacted(&user.email), "user signed up");
    Ok(AuthPayload { token, user })
}

/// Exchange email and password for a token. Unknown email and wrong password
/// are indistinguishable to the caller.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    now: SystemTime,
    email: &str,
    password: &str,
) -> Result<AuthPayload, AppError> {
    let email = normalize_email(email);

    let Some(user) = users::find_user_by_email(conn, &email).await? else {
        security::login_failed("unknown_email", &email);
        return Err(AppError::invalid_credentials());
    };

    if !verify_password(password, &user.password_hash) {
        security::login_failed("wrong_password", &email);
        return Err(AppError::invalid_credentials());
    }

    let token = mint_access_token(&user.id, &user.username, now, security)?;
    debug!(user_id = %user.id, "user logged in");
    Ok(AuthPayload { token, user })
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<User, AppError> {
    users::find_user_by_id(conn, user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, AppError> {
    Ok(users::find_user_by_username(conn, username.trim()).await?)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    Ok(users::list_users(conn).await?)
}
