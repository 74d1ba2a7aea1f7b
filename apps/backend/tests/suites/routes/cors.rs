use actix_web::http::{header, Method};
use actix_web::test;
use serial_test::serial;

use crate::support::{create_test_app, test_state};

#[actix_web::test]
#[serial]
async fn test_preflight_allows_authorization_header() -> Result<(), Box<dyn std::error::Error>> {
    std::env::remove_var("CORS_ALLOWED_ORIGINS");
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    let allowed = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(allowed.contains("authorization"), "allowed headers: {allowed}");
    Ok(())
}

#[actix_web::test]
#[serial]
async fn test_unknown_origin_is_not_allowed() -> Result<(), Box<dyn std::error::Error>> {
    std::env::remove_var("CORS_ALLOWED_ORIGINS");
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
    Ok(())
}
