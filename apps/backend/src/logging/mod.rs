//! Logging helpers: PII redaction and security event records.

pub mod pii;
pub mod security;
