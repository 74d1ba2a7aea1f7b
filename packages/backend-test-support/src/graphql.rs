//! Helpers for inspecting GraphQL response bodies in tests.

use serde_json::Value;

/// Error codes in response order, read from `errors[].extensions.code`.
pub fn error_codes(body: &Value) -> Vec<String> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.pointer("/extensions/code"))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Assert exactly one GraphQL error with `code` and a message containing
/// `message_contains`; returns the error object.
pub fn assert_single_error<'a>(body: &'a Value, code: &str, message_contains: &str) -> &'a Value {
    let errors = body
        .get("errors")
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("expected GraphQL errors, got {body}"));
    assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");

    let error = &errors[0];
    assert_eq!(
        error.pointer("/extensions/code").and_then(Value::as_str),
        Some(code),
        "unexpected error {error}"
    );
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    assert!(
        message.contains(message_contains),
        "expected message containing '{message_contains}', got '{message}'"
    );
    error
}

/// Assert the response carries no `errors` key.
pub fn assert_no_errors(body: &Value) {
    assert!(
        body.get("errors").is_none(),
        "unexpected GraphQL errors: {}",
        body["errors"]
    );
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn collects_codes_in_order() {
        let body = json!({
            "data": null,
            "errors": [
                {"message": "a", "extensions": {"code": "UNAUTHENTICATED"}},
                {"message": "b"},
                {"message": "c", "extensions": {"code": "NOT_FOUND"}}
            ]
        });
        assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED", "NOT_FOUND"]);
    }

    #[test]
    fn no_errors_is_empty() {
        assert!(error_codes(&json!({"data": {}})).is_empty());
        assert_no_errors(&json!({"data": {}}));
    }
}
