//! User records held by the credential store, and per-request credentials.

use serde::{Deserialize, Serialize};

use gatehouse_core::{Entity, Username};

fn default_active() -> bool {
    true
}

/// A stored user.
///
/// Seeded at process start and read-only afterwards. `password_hash` is a
/// bcrypt digest (`$2b$...`); it is never rendered by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: Username,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password_hash: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UserRecord {
    /// An active user with no display name or email.
    pub fn new(username: Username, password_hash: impl Into<String>) -> Self {
        Self {
            username,
            display_name: None,
            email: None,
            password_hash: password_hash.into(),
            is_active: true,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl Entity for UserRecord {
    type Id = Username;

    fn id(&self) -> &Self::Id {
        &self.username
    }
}

impl core::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// Username/password pair supplied with a login request. Never persisted.
#[derive(Clone, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
