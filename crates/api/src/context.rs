use gatehouse_auth::UserRecord;

/// Authenticated user for a request.
///
/// Inserted into request extensions by the auth middleware after the session
/// guard has resolved the bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user: UserRecord,
}

impl CurrentUser {
    pub fn new(user: UserRecord) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    pub fn username(&self) -> &str {
        self.user.username.as_str()
    }
}
