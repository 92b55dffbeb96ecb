//! `gatehouse-auth` — credential verification and stateless session tokens.
//!
//! This crate is intentionally decoupled from HTTP. Every operation takes the
//! current time as an argument and reads an immutable credential snapshot, so
//! login and session resolution can run concurrently without locking.

pub mod authenticator;
pub mod claims;
pub mod codec;
pub mod config;
pub mod guard;
pub mod password;
pub mod store;
pub mod user;

pub use authenticator::{AuthFailure, Authenticator};
pub use claims::{TokenClaims, TokenError, validate_claims};
pub use codec::{IssuedToken, TOKEN_TYPE_BEARER, TokenCodec};
pub use config::{AuthConfig, ConfigError, SecretKey, SigningAlgorithm};
pub use guard::{SessionError, SessionGuard};
pub use password::{PasswordError, PasswordHasher};
pub use store::{CredentialStore, InMemoryCredentialStore};
pub use user::{Credential, UserRecord};
