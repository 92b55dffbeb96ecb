use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access-token claim set.
///
/// Timestamps are whole seconds since the Unix epoch, as required by the
/// compact token format. Tokens minted elsewhere may omit `iat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the username the token was issued to.
    pub sub: String,

    /// Issued-at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration timestamp.
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, wrong algorithm, malformed structure or claims.
    #[error("invalid token")]
    Invalid,

    #[error("token has expired")]
    Expired,

    /// Signing failed while issuing a token.
    #[error("encode token: {0}")]
    Encode(String),
}

impl TokenClaims {
    /// Claims for `subject`, valid from `now` until `now + ttl`.
    pub fn issue(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = now.timestamp();
        Self {
            sub: subject.into(),
            iat: Some(iat),
            exp: iat.saturating_add(ttl.num_seconds()),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token is expired once the current second is past `exp`; at `exp`
    /// itself it is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

/// Deterministically validate decoded claims against the caller's clock.
///
/// Signature verification happens in the codec before this is called.
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), TokenError> {
    if let Some(iat) = claims.iat {
        if claims.exp < iat {
            return Err(TokenError::Invalid);
        }
    }
    if claims.sub.is_empty() {
        return Err(TokenError::Invalid);
    }
    if claims.is_expired_at(now) {
        return Err(TokenError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn issue_sets_expiry_from_ttl() {
        let claims = TokenClaims::issue("johndoe", t0(), Duration::minutes(30));
        assert_eq!(claims.sub, "johndoe");
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, 1_700_000_000 + 30 * 60);
        assert_eq!(claims.expires_at(), Some(t0() + Duration::minutes(30)));
    }

    #[test]
    fn zero_ttl_is_valid_at_issuance_then_expires() {
        let claims = TokenClaims::issue("johndoe", t0(), Duration::zero());
        assert_eq!(validate_claims(&claims, t0()), Ok(()));
        assert_eq!(
            validate_claims(&claims, t0() + Duration::seconds(1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn sub_second_offsets_do_not_expire_early() {
        let claims = TokenClaims::issue("johndoe", t0(), Duration::zero());
        assert_eq!(validate_claims(&claims, t0() + Duration::milliseconds(999)), Ok(()));
    }

    #[test]
    fn inverted_time_window_is_invalid() {
        let claims = TokenClaims {
            sub: "johndoe".into(),
            iat: Some(100),
            exp: 50,
        };
        assert_eq!(validate_claims(&claims, t0()), Err(TokenError::Invalid));
    }

    #[test]
    fn empty_subject_is_invalid() {
        let claims = TokenClaims::issue("", t0(), Duration::minutes(1));
        assert_eq!(validate_claims(&claims, t0()), Err(TokenError::Invalid));
    }

    #[test]
    fn iat_is_optional_on_the_wire() {
        let claims: TokenClaims = serde_json::from_str(r#"{"sub":"johndoe","exp":10}"#).unwrap();
        assert_eq!(claims.iat, None);
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("iat").is_none());
    }

    proptest! {
        /// Once expired, a token stays expired for every later instant.
        #[test]
        fn expiry_is_permanent(ttl in 0i64..10_000, first in 0i64..20_000, later in 0i64..20_000) {
            let claims = TokenClaims::issue("u", t0(), Duration::seconds(ttl));
            let at = t0() + Duration::seconds(first);
            if claims.is_expired_at(at) {
                prop_assert!(claims.is_expired_at(at + Duration::seconds(later)));
            }
        }
    }
}
