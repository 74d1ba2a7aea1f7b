use session_token::Claims;

use crate::error::AppError;

/// A verified caller: claims whose signature and expiry checked out, plus
/// the raw token they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub claims: Claims,
    pub token: String,
}

impl Identity {
    /// Acting user id. Never taken from request arguments.
    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }

    pub fn username(&self) -> &str {
        &self.claims.username
    }
}

/// Per-request authentication state. Built once by the request-context
/// middleware and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(claims: Claims, token: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                claims,
                token: token.into(),
            }),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The verified identity, or `AppError::Unauthorized`.
    pub fn require_identity(&self) -> Result<&Identity, AppError> {
        self.identity.as_ref().ok_or_else(AppError::unauthorized)
    }
}
