//! Username/password verification against the credential store.

use std::sync::Arc;

use thiserror::Error;

use gatehouse_core::Username;

use crate::password::{PasswordError, PasswordHasher};
use crate::store::CredentialStore;
use crate::user::{Credential, UserRecord};

/// Why a login attempt failed.
///
/// The two variants exist for logging and tests only. Callers facing a client
/// must render both with [`AuthFailure::public_message`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("unknown user")]
    UnknownUser,

    #[error("bad credentials")]
    BadCredentials,
}

impl AuthFailure {
    pub const PUBLIC_MESSAGE: &'static str = "Incorrect username or password";

    pub fn public_message(&self) -> &'static str {
        Self::PUBLIC_MESSAGE
    }
}

/// Looks users up and checks their password.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    // Verified against when the user does not exist, so both failure paths
    // pay for one bcrypt run at the configured cost.
    dummy_digest: String,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Result<Self, PasswordError> {
        let dummy_digest = hasher.hash("gatehouse-dummy-password")?;
        Ok(Self {
            store,
            hasher,
            dummy_digest,
        })
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserRecord, AuthFailure> {
        let user = Username::parse(username)
            .ok()
            .and_then(|username| self.store.find(&username));

        let Some(user) = user else {
            let _ = self.hasher.verify(password, &self.dummy_digest);
            tracing::debug!("login rejected: unknown user");
            return Err(AuthFailure::UnknownUser);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::debug!(username = %user.username, "login rejected: bad credentials");
            return Err(AuthFailure::BadCredentials);
        }

        Ok(user)
    }

    pub fn authenticate_credential(&self, credential: &Credential) -> Result<UserRecord, AuthFailure> {
        self.authenticate(&credential.username, &credential.password)
    }
}
