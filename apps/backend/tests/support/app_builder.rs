use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::config::db::{DbKind, DbProfile};
use backend::graphql::build_schema;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_context::BuildRequestContext;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::state::app_state::AppState;
use backend::AppError;
use session_token::SecurityConfig;

use crate::common::TEST_SECRET;

/// Fresh in-memory SQLite state with migrations applied.
pub async fn test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbKind::SqliteMemory, DbProfile::Test)
        .with_security(SecurityConfig::new(TEST_SECRET.as_bytes()))
        .build()
        .await
}

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the test service with the same middleware stack and routes as
    /// `main.rs`.
    pub async fn build(
        self,
    ) -> Result<
        impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
        AppError,
    > {
        let schema = web::Data::new(build_schema(self.state.clone()));
        let data = web::Data::new(self.state);

        let service = test::init_service(
            App::new()
                .wrap(cors_middleware())
                .wrap(BuildRequestContext)
                .wrap(StructuredLogger)
                .wrap(RequestTrace)
                .app_data(data)
                .app_data(schema)
                .configure(routes::configure),
        )
        .await;

        Ok(service)
    }
}

/// Create a new test app builder with the given AppState
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
