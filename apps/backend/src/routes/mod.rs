use actix_web::web;

pub mod graphql;
pub mod health;

/// Register every HTTP route. Middleware is wired by the caller (`main.rs`
/// and the test app builder) so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(graphql::configure_routes);
}
