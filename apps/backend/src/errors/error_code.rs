//! Error codes for the Deep Thoughts API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in ProblemDetails bodies and GraphQL error extensions.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Operation needs a verified identity
    Unauthenticated,
    /// Email/password pair did not match
    InvalidCredentials,
    /// Token could not be issued
    TokenIssueFailed,

    // Request Validation
    /// General validation error
    ValidationError,
    InvalidUsername,
    InvalidEmail,
    InvalidPassword,
    InvalidThoughtText,
    InvalidReactionBody,
    /// A user cannot befriend themselves
    SelfFriendship,

    // Resource Not Found
    UserNotFound,
    ThoughtNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    UniqueUsername,
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::TokenIssueFailed => "TOKEN_ISSUE_FAILED",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidThoughtText => "INVALID_THOUGHT_TEXT",
            Self::InvalidReactionBody => "INVALID_REACTION_BODY",
            Self::SelfFriendship => "SELF_FRIENDSHIP",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ThoughtNotFound => "THOUGHT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueUsername => "UNIQUE_USERNAME",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
