//! Session guard: bearer token → active user record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use gatehouse_core::Username;

use crate::codec::TokenCodec;
use crate::store::CredentialStore;
use crate::user::UserRecord;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Token invalid or expired, or its subject is not a known user.
    #[error("could not validate credentials")]
    Unauthenticated,

    #[error("inactive user")]
    Inactive,
}

/// Resolves presented tokens back to user records.
///
/// `resolve` reads only its arguments and the (immutable) store, so one guard
/// can be shared across request tasks.
#[derive(Clone)]
pub struct SessionGuard {
    codec: TokenCodec,
    store: Arc<dyn CredentialStore>,
}

impl SessionGuard {
    pub fn new(codec: TokenCodec, store: Arc<dyn CredentialStore>) -> Self {
        Self { codec, store }
    }

    pub fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<UserRecord, SessionError> {
        let claims = self.codec.decode(token, now).map_err(|e| {
            tracing::debug!(error = %e, "session rejected");
            SessionError::Unauthenticated
        })?;

        let username = Username::parse(claims.sub).map_err(|_| SessionError::Unauthenticated)?;

        let user = self.store.find(&username).ok_or_else(|| {
            tracing::debug!("session rejected: subject not found");
            SessionError::Unauthenticated
        })?;

        if !user.is_active {
            return Err(SessionError::Inactive);
        }

        Ok(user)
    }
}
