pub mod cors;
pub mod request_context;
pub mod request_trace;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use request_context::BuildRequestContext;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
