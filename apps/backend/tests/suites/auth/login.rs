// Integration tests for signup and login mutations.
//
// Tests both successful flows and credential/validation errors.

use std::time::SystemTime;

use backend::repos::users;
use backend_test_support::graphql::{assert_no_errors, assert_single_error};
use backend_test_support::unique_helpers::{unique_email, unique_username};
use serde_json::json;
use session_token::SecurityConfig;

use crate::common::TEST_SECRET;
use crate::support::factory::{sign_up, SIGNUP};
use crate::support::graphql::gql;
use crate::support::{create_test_app, test_state};

const LOGIN: &str = r#"
    mutation Login($email: String!, $password: String!) {
        login(email: $email, password: $password) { token user { _id username } }
    }
"#;

// ============================================================================
// Happy Path Tests
// ============================================================================

#[actix_web::test]
async fn test_signup_issues_verifiable_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;

    let alice = sign_up(&app, "alice").await;

    let claims = session_token::verify(
        &alice.token,
        &SecurityConfig::new(TEST_SECRET.as_bytes()),
        SystemTime::now(),
    )?;
    assert_eq!(claims.sub, alice.id);
    assert_eq!(claims.username, alice.username);

    let stored = users::find_user_by_id(state.db()?, &alice.id)
        .await?
        .expect("user row");
    assert_ne!(stored.password_hash, alice.password, "password stored hashed");
    assert!(stored.password_hash.starts_with("$argon2"));
    Ok(())
}

#[actix_web::test]
async fn test_login_returns_same_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(
        &app,
        LOGIN,
        json!({ "email": alice.email.to_uppercase(), "password": alice.password }),
        None,
    )
    .await;
    assert_no_errors(&body);

    let auth = &body["data"]["login"];
    assert_eq!(auth["user"]["_id"], json!(alice.id));
    assert!(!auth["token"].as_str().unwrap().is_empty());
    Ok(())
}

// ============================================================================
// Negative Tests
// ============================================================================

#[actix_web::test]
async fn test_login_does_not_reveal_which_credential_failed(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let wrong_password = gql(
        &app,
        LOGIN,
        json!({ "email": alice.email, "password": "not-the-password" }),
        None,
    )
    .await;
    let unknown_email = gql(
        &app,
        LOGIN,
        json!({ "email": unique_email("ghost"), "password": alice.password }),
        None,
    )
    .await;

    let a = assert_single_error(&wrong_password, "INVALID_CREDENTIALS", "Incorrect credentials");
    let b = assert_single_error(&unknown_email, "INVALID_CREDENTIALS", "Incorrect credentials");
    assert_eq!(a["message"], b["message"]);
    assert!(wrong_password["data"].is_null());
    Ok(())
}

#[actix_web::test]
async fn test_signup_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let same_username = gql(
        &app,
        SIGNUP,
        json!({
            "username": alice.username,
            "email": unique_email("other"),
            "password": "hunter22"
        }),
        None,
    )
    .await;
    assert_single_error(&same_username, "UNIQUE_USERNAME", "Username already taken");

    let same_email = gql(
        &app,
        SIGNUP,
        json!({
            "username": unique_username("other"),
            "email": alice.email,
            "password": "hunter22"
        }),
        None,
    )
    .await;
    assert_single_error(&same_email, "UNIQUE_EMAIL", "Email already registered");
    Ok(())
}

#[actix_web::test]
async fn test_signup_validation() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;

    let cases = [
        ("", unique_email("v"), "hunter22", "INVALID_USERNAME"),
        (
            "valid_name",
            "not-an-email".to_string(),
            "hunter22",
            "INVALID_EMAIL",
        ),
        ("valid_name", unique_email("v"), "abcd", "INVALID_PASSWORD"),
    ];

    for (username, email, password, code) in cases {
        let body = gql(
            &app,
            SIGNUP,
            json!({ "username": username, "email": email, "password": password }),
            None,
        )
        .await;
        assert_single_error(&body, code, "");
    }

    assert!(users::list_users(state.db()?).await?.is_empty());
    Ok(())
}
