#![allow(dead_code)]

// tests/common/mod.rs
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Signing secret shared by every integration test binary.
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// The `traceId` extension of the first GraphQL error.
pub fn first_error_trace_id(body: &Value) -> Option<&str> {
    body.pointer("/errors/0/extensions/traceId")
        .and_then(Value::as_str)
}
