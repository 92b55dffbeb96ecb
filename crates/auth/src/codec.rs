//! Signed access tokens in compact `header.claims.signature` form.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::claims::{TokenClaims, TokenError, validate_claims};
use crate::config::{AuthConfig, SecretKey, SigningAlgorithm};

/// `token_type` of every token this service issues.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Token handed to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
}

impl IssuedToken {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

/// Encodes and decodes access tokens with a fixed secret and HMAC algorithm.
///
/// Expiry is checked against the `now` passed by the caller, not the library's
/// own clock, so decoding is a pure function of (token, key, now).
#[derive(Clone)]
pub struct TokenCodec {
    algorithm: SigningAlgorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &SecretKey, algorithm: SigningAlgorithm) -> Self {
        let mut validation = Validation::new(algorithm.to_jwt());
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.secret_key, config.algorithm)
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Sign claims for `subject` expiring at `now + ttl`.
    pub fn encode(&self, subject: &str, ttl: Duration, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.encode_claims(&TokenClaims::issue(subject, now, ttl))
    }

    pub fn encode_claims(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(self.algorithm.to_jwt()), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    /// Encode and wrap as a bearer token response.
    pub fn issue(&self, subject: &str, ttl: Duration, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        self.encode(subject, ttl, now).map(IssuedToken::bearer)
    }

    /// Verify the signature and structure, then check expiry at `now`.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                TokenError::Invalid
            })?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

impl core::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
