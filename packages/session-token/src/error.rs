use thiserror::Error;

/// Why a presented token was not accepted.
///
/// These are ordinary outcomes of handling untrusted input; callers decide
/// what they mean (the backend downgrades all of them to "anonymous").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidToken {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    SignatureMismatch,
    #[error("token has expired")]
    Expired,
}

impl InvalidToken {
    /// Stable label for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidToken::Malformed => "malformed",
            InvalidToken::SignatureMismatch => "signature_mismatch",
            InvalidToken::Expired => "expired",
        }
    }
}

/// Token issuance failures. Fatal to the login or signup attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("failed to encode token: {0}")]
    Encode(String),
}
