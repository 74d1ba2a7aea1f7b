//! Unique test data built from ULIDs so tests sharing a database never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// assert_ne!(a, unique_str("user"));
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique username: `{prefix}_{ulid}` lowercased
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, Ulid::new()).to_lowercase()
}

/// A unique email address in the format `{prefix}-{ulid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
