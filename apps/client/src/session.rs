//! Client session state.
//!
//! Two observable states, `Anonymous` and `Authenticated(claims)`. The token
//! payload is decoded locally without the signing secret: it drives display
//! decisions only, and the server re-verifies every request. Expiry is
//! detected lazily whenever the state is read.

use std::io;
use std::time::SystemTime;

use session_token::{decode_unverified, unix_seconds, Claims, InvalidToken};
use thiserror::Error;
use tracing::debug;

use crate::navigation::Navigator;
use crate::routes::Route;
use crate::storage::TokenStore;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no session token is stored")]
    NoToken,
    #[error("stored session token could not be decoded: {0}")]
    Decode(#[from] InvalidToken),
    #[error("session storage failed: {0}")]
    Storage(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated(Claims),
}

/// The session object: constructed once at startup and handed to whatever
/// needs it.
pub struct AuthSession<S, N> {
    store: S,
    navigator: N,
}

impl<S: TokenStore, N: Navigator> AuthSession<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The stored token, if any. Says nothing about validity.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.store.get()?)
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in_at(SystemTime::now())
    }

    /// True iff a token is stored and its `exp` is after `now`.
    pub fn is_logged_in_at(&self, now: SystemTime) -> bool {
        matches!(self.status_at(now), SessionStatus::Authenticated(_))
    }

    pub fn status(&self) -> SessionStatus {
        self.status_at(SystemTime::now())
    }

    /// Missing, undecodable and expired tokens all read as anonymous.
    pub fn status_at(&self, now: SystemTime) -> SessionStatus {
        match self.current_profile() {
            Ok(claims) if !claims.is_expired_at(unix_seconds(now)) => {
                SessionStatus::Authenticated(claims)
            }
            Ok(claims) => {
                debug!(exp = claims.exp, "stored token has expired");
                SessionStatus::Anonymous
            }
            Err(SessionError::NoToken) => SessionStatus::Anonymous,
            Err(e) => {
                debug!(error = %e, "stored token unusable");
                SessionStatus::Anonymous
            }
        }
    }

    /// Claims of the stored token, expired or not. A token that fails to
    /// decode stays in storage.
    pub fn current_profile(&self) -> Result<Claims, SessionError> {
        let token = self.store.get()?.ok_or(SessionError::NoToken)?;
        Ok(decode_unverified(&token)?)
    }

    /// Persist `token`, then navigate to the landing route.
    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        self.store.set(token)?;
        self.navigator.navigate(&Route::LANDING);
        Ok(())
    }

    /// Forget the token, then navigate to the landing route.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.remove()?;
        self.navigator.navigate(&Route::LANDING);
        Ok(())
    }
}
