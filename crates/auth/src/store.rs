//! Credential store: username → user record lookup.
//!
//! The authenticator and session guard only see the [`CredentialStore`] trait,
//! so a database-backed implementation can replace the in-memory one.

use std::collections::HashMap;
use std::sync::Arc;

use gatehouse_core::Username;

use crate::user::UserRecord;

/// Read-only lookup of user records by username.
///
/// Implementations must be safe to call concurrently; the auth flows never
/// mutate the store.
pub trait CredentialStore: Send + Sync {
    fn find(&self, username: &Username) -> Option<UserRecord>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    fn find(&self, username: &Username) -> Option<UserRecord> {
        (**self).find(username)
    }
}

/// In-memory store, populated at start-up.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<Username, UserRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.insert(user);
        self
    }

    /// Insert or replace the record keyed by `user.username`.
    ///
    /// Returns the record that was replaced, if any.
    pub fn insert(&mut self, user: UserRecord) -> Option<UserRecord> {
        self.users.insert(user.username.clone(), user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<UserRecord> for InMemoryCredentialStore {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for user in iter {
            store.insert(user);
        }
        store
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn find(&self, username: &Username) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }
}
