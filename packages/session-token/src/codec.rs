use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::config::SecurityConfig;
use crate::error::{InvalidToken, SigningError};

/// Seconds since the unix epoch; clocks set before the epoch read as 0.
pub fn unix_seconds(at: SystemTime) -> i64 {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Mint a signed token for `sub`/`username`, valid for `security.token_ttl` from `now`.
pub fn issue(
    sub: &str,
    username: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, SigningError> {
    if !security.has_secret() {
        return Err(SigningError::MissingSecret);
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| SigningError::Encode("system clock is before the unix epoch".to_string()))?
        .as_secs() as i64;
    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims::new(sub, username, iat, exp);

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| SigningError::Encode(e.to_string()))
}

/// Verify signature and expiry of `token` as of `now`.
///
/// Expiry is checked here rather than by the decoder so that a token whose
/// `exp` equals `now` is already rejected and no leeway applies.
pub fn verify(
    token: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<Claims, InvalidToken> {
    if !security.has_secret() {
        return Err(InvalidToken::SignatureMismatch);
    }

    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            InvalidToken::SignatureMismatch
        }
        ErrorKind::ExpiredSignature => InvalidToken::Expired,
        _ => InvalidToken::Malformed,
    })?;

    if claims.is_expired_at(unix_seconds(now)) {
        return Err(InvalidToken::Expired);
    }

    Ok(claims)
}

/// Read the claims of `token` without checking its signature or expiry.
///
/// Client-side only: the payload is trusted for display decisions, never for
/// authorization.
pub fn decode_unverified(token: &str) -> Result<Claims, InvalidToken> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(InvalidToken::Malformed);
    };

    if header.is_empty() || payload.is_empty() {
        return Err(InvalidToken::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| InvalidToken::Malformed)?;

    serde_json::from_slice::<Claims>(&bytes).map_err(|_| InvalidToken::Malformed)
}
