//! Start-up seeding of the in-memory credential store.

use std::path::{Path, PathBuf};

use thiserror::Error;

use gatehouse_auth::{InMemoryCredentialStore, UserRecord};
use gatehouse_core::{DomainError, Username};

/// bcrypt (cost 12) digest of the demo password `secret`.
pub const DEMO_PASSWORD_HASH: &str = "$2b$12$EixZaYVK1fsbw1ZfbX3OXePaWxn96p36WQoeG6Lruj3vjPGga31lW";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("read users file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse users file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The single demo account: `johndoe` / `secret`, active.
pub fn demo_store() -> Result<InMemoryCredentialStore, SeedError> {
    let johndoe = UserRecord::new(Username::parse("johndoe")?, DEMO_PASSWORD_HASH)
        .with_display_name("John Doe")
        .with_email("johndoe@example.com");
    Ok(InMemoryCredentialStore::new().with_user(johndoe))
}

/// Load a JSON array of user records. Later duplicates replace earlier ones.
pub fn load_users_file(path: &Path) -> Result<InMemoryCredentialStore, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let users: Vec<UserRecord> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(users.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use gatehouse_auth::CredentialStore;

    #[test]
    fn demo_store_has_johndoe() {
        let store = demo_store().unwrap();
        let user = store.find(&Username::parse("johndoe").unwrap()).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("John Doe"));
        assert_eq!(user.email.as_deref(), Some("johndoe@example.com"));
        assert!(user.is_active);
        assert_eq!(user.password_hash, DEMO_PASSWORD_HASH);
    }

    #[test]
    fn loads_users_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"username":"alice","password_hash":"$2b$04$a","email":"alice@example.com"}},
                {{"username":"bob","password_hash":"$2b$04$b","is_active":false}}
            ]"#
        )
        .unwrap();

        let store = load_users_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find(&Username::parse("alice").unwrap()).unwrap().is_active);
        assert!(!store.find(&Username::parse("bob").unwrap()).unwrap().is_active);
    }

    #[test]
    fn invalid_username_in_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"username":"not valid","password_hash":"x"}}]"#).unwrap();
        assert!(matches!(load_users_file(file.path()), Err(SeedError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_users_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
