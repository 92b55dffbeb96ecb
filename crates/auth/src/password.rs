//! Password hashing and verification (bcrypt).

use thiserror::Error;

/// Lowest bcrypt cost accepted (fast; meant for tests).
pub const MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted.
pub const MAX_COST: u32 = 31;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("bcrypt cost {0} outside {MIN_COST}..={MAX_COST}")]
    InvalidCost(u32),

    #[error("hash password: {0}")]
    Hash(String),
}

/// One-way salted password hashing.
///
/// Digests are self-describing (`$2b$<cost>$<salt><hash>`), so verification
/// reads the salt and cost from the stored digest rather than from `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash with a fresh random salt; two calls on the same input differ.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordError::Hash(e.to_string()))
    }

    /// Check `plaintext` against a stored digest.
    ///
    /// A malformed digest is a mismatch, not an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: crate::config::DEFAULT_BCRYPT_COST,
        }
    }
}
