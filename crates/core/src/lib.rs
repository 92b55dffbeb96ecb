//! `gatehouse-core` — domain primitives shared by the auth and API crates.
//!
//! This crate contains **pure domain** types (no crypto, no transport).

pub mod entity;
pub mod error;
pub mod username;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use username::Username;
pub use value_object::ValueObject;
