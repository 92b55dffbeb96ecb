//! Deployment-level auth settings: signing secret, algorithm, token lifetime.
//!
//! Nothing here reads the environment; the API binary builds an `AuthConfig`
//! from its settings and hands it to the codec and hasher.

use core::str::FromStr;

use chrono::Duration;
use thiserror::Error;

use crate::password::{MAX_COST, MIN_COST};

/// Default access-token lifetime.
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Default bcrypt work factor (matches the cost of the seeded demo digest).
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("secret key must not be empty")]
    EmptySecret,

    #[error("unsupported signing algorithm '{0}' (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("access token ttl must not be negative")]
    NegativeTtl,

    #[error("bcrypt cost {0} outside {MIN_COST}..={MAX_COST}")]
    InvalidCost(u32),
}

/// Symmetric signing secret. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// HMAC signing algorithms accepted for access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SigningAlgorithm {
    #[default]
    Hs256,
    Hs384,
    Hs512,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::Hs256 => "HS256",
            SigningAlgorithm::Hs384 => "HS384",
            SigningAlgorithm::Hs512 => "HS512",
        }
    }

    pub(crate) fn to_jwt(self) -> jsonwebtoken::Algorithm {
        match self {
            SigningAlgorithm::Hs256 => jsonwebtoken::Algorithm::HS256,
            SigningAlgorithm::Hs384 => jsonwebtoken::Algorithm::HS384,
            SigningAlgorithm::Hs512 => jsonwebtoken::Algorithm::HS512,
        }
    }
}

impl core::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Self::Hs256, Self::Hs384, Self::Hs512]
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Auth configuration consumed by the token codec and password hasher.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret_key: SecretKey,
    pub algorithm: SigningAlgorithm,
    pub access_token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Config with the default algorithm, TTL and bcrypt cost.
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            secret_key,
            algorithm: SigningAlgorithm::default(),
            access_token_ttl: Duration::minutes(DEFAULT_ACCESS_TOKEN_TTL_MINUTES),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn with_algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Result<Self, ConfigError> {
        if ttl < Duration::zero() {
            return Err(ConfigError::NegativeTtl);
        }
        self.access_token_ttl = ttl;
        Ok(self)
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Result<Self, ConfigError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(ConfigError::InvalidCost(cost));
        }
        self.bcrypt_cost = cost;
        Ok(self)
    }
}
