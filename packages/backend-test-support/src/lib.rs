//! Backend test support utilities
//!
//! Shared by the backend's unit and integration test binaries: one-time
//! logging setup, unique test data and response-contract assertions.

pub mod graphql;
pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
