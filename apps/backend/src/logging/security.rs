use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a failed login. The reason is internal; clients only ever see
/// "Incorrect credentials".
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log an anonymous call to an operation that needs an identity.
pub fn unauthenticated_access(operation: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_UNAUTHENTICATED_ACCESS",
        %trace_id,
        operation,
        "Operation requires authentication"
    );
}
