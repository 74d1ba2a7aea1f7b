use serde::{Deserialize, Serialize};

/// Identity claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id (users.id)
    pub sub: String,
    pub username: String,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: impl Into<String>, username: impl Into<String>, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.into(),
            username: username.into(),
            iat,
            exp,
        }
    }

    /// A token is expired once `now` reaches `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::Claims;

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = Claims::new("u1", "alice", 100, 200);
        assert!(!claims.is_expired_at(199));
        assert!(claims.is_expired_at(200));
        assert!(claims.is_expired_at(201));
    }

    #[test]
    fn missing_iat_defaults_to_zero() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"u1","username":"alice","exp":10}"#).unwrap();
        assert_eq!(claims.iat, 0);
        assert_eq!(claims.exp, 10);
    }

    #[test]
    fn missing_exp_does_not_deserialize() {
        let parsed = serde_json::from_str::<Claims>(r#"{"sub":"u1","username":"alice"}"#);
        assert!(parsed.is_err());
    }
}
