// Bearer header handling end to end: any header that does not carry a valid,
// unexpired token behaves exactly like no header at all.

use std::time::{Duration, SystemTime};

use actix_web::http::header::HeaderValue;
use backend_test_support::graphql::{assert_no_errors, error_codes};
use serde_json::json;
use session_token::SecurityConfig;

use crate::common::TEST_SECRET;
use crate::support::factory::sign_up;
use crate::support::graphql::{gql, GqlCall};
use crate::support::{create_test_app, test_state};

const ME: &str = "{ me { _id username } }";

#[actix_web::test]
async fn test_valid_token_identifies_caller() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(&app, ME, json!({}), Some(&alice.token)).await;
    assert_no_errors(&body);
    assert_eq!(body["data"]["me"]["username"], json!(alice.username));
    Ok(())
}

#[actix_web::test]
async fn test_expired_token_is_anonymous() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let security = SecurityConfig::new(TEST_SECRET.as_bytes()).with_ttl(Duration::from_secs(60));
    let issued_at = SystemTime::now() - Duration::from_secs(120);
    let expired = session_token::issue(&alice.id, &alice.username, issued_at, &security)?;

    let body = gql(&app, ME, json!({}), Some(&expired)).await;
    assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"]);
    assert!(body["data"]["me"].is_null());
    Ok(())
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_anonymous(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let forged = session_token::issue(
        &alice.id,
        &alice.username,
        SystemTime::now(),
        &SecurityConfig::new("some-other-secret"),
    )?;

    let body = gql(&app, ME, json!({}), Some(&forged)).await;
    assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"]);
    Ok(())
}

#[actix_web::test]
async fn test_malformed_headers_are_anonymous() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let headers = [
        String::new(),
        "Bearer".to_string(),
        "Bearer ".to_string(),
        "Basic abc".to_string(),
        "bearer ".to_string() + &alice.token,
        alice.token.clone(),
        format!("Bearer {} extra", alice.token),
        "Bearer not.a.jwt".to_string(),
    ];

    for raw in headers {
        let (_, _, body) = GqlCall::new(ME)
            .authorization(HeaderValue::from_str(&raw)?)
            .send(&app)
            .await;
        assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"], "header: {raw:?}");
    }

    // public fields keep working with a garbage header
    let (_, _, body) = GqlCall::new("{ users { _id } }")
        .authorization(HeaderValue::from_static("Bearer garbage"))
        .send(&app)
        .await;
    assert_no_errors(&body);
    Ok(())
}

#[actix_web::test]
async fn test_non_utf8_header_is_anonymous() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;

    let value = HeaderValue::from_bytes(b"Bearer \xfa\xfb")?;
    let (_, _, body) = GqlCall::new(ME).authorization(value).send(&app).await;
    assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"]);
    Ok(())
}
