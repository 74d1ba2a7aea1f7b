pub mod app_builder;
pub mod factory;
pub mod graphql;

// Re-export only what current tests actually import
pub use app_builder::{create_test_app, test_state};
