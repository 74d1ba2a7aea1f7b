use actix_web::http::StatusCode;
use actix_web::test;
use backend::infra::state::build_state;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::Value;

use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], 1);
    Ok(())
}

#[actix_web::test]
async fn test_health_without_database_is_problem_details() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_state().build().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp.map_into_boxed_body(),
        "DB_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        Some("temporarily unavailable"),
    )
    .await;
    Ok(())
}
