use serde::{Deserialize, Serialize};

use gatehouse_auth::UserRecord;

/// Public view of a user record (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOut {
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl From<&UserRecord> for UserOut {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.to_string(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub item_id: String,
    pub owner: String,
}
