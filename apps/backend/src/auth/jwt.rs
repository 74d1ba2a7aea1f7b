use std::time::SystemTime;

use session_token::{Claims, InvalidToken, SecurityConfig};
use tracing::debug;

use crate::error::AppError;

/// Mint an access token for a freshly authenticated user.
///
/// Signing failures are fatal to the login/signup attempt.
pub fn mint_access_token(
    user_id: &str,
    username: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let token = session_token::issue(user_id, username, now, security)?;
    debug!(user_id, ttl_secs = security.token_ttl.as_secs(), "access token minted");
    Ok(token)
}

/// Verify signature and expiry of `token` as of `now`.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<Claims, InvalidToken> {
    session_token::verify(token, security, now)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_mint_and_verify() {
        let security = SecurityConfig::new("jwt-test-secret");
        let now = SystemTime::now();

        let token = mint_access_token("u1", "alice", now, &security).unwrap();
        let claims = verify_access_token(&token, &security, now).unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_token_stops_verifying_after_ttl() {
        let security = SecurityConfig::new("jwt-test-secret").with_ttl(Duration::from_secs(30));
        let now = SystemTime::now();
        let token = mint_access_token("u1", "alice", now, &security).unwrap();

        assert_eq!(
            verify_access_token(&token, &security, now + Duration::from_secs(30)),
            Err(InvalidToken::Expired)
        );
    }

    #[test]
    fn test_missing_secret_fails_mint() {
        let err = mint_access_token("u1", "alice", SystemTime::now(), &SecurityConfig::new(""))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TokenIssueFailed);
    }
}
