//! Authentication and authorization tests
//!
//! Tests for signup/login flows, token validation and request context
//! construction.
//!
//! Run all auth tests:
//!   cargo test --test auth_tests
//!
//! Run specific auth tests:
//!   cargo test --test auth_tests auth::login::

mod common;
mod support;

#[path = "suites/auth/mod.rs"]
mod auth;
