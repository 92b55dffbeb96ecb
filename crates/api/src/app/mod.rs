//! HTTP API application wiring (Axum router + shared auth state).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use chrono::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use gatehouse_auth::{Authenticator, CredentialStore, PasswordError, PasswordHasher, SessionGuard, TokenCodec};

use crate::config::Settings;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Auth services shared by every request.
pub struct AppState {
    pub authenticator: Authenticator,
    pub guard: SessionGuard,
    pub codec: TokenCodec,
    pub access_token_ttl: Duration,
}

impl AppState {
    pub fn new(settings: &Settings, store: Arc<dyn CredentialStore>) -> Result<Self, PasswordError> {
        let codec = TokenCodec::from_config(&settings.auth);
        let hasher = PasswordHasher::new(settings.auth.bcrypt_cost)?;

        Ok(Self {
            authenticator: Authenticator::new(store.clone(), hasher)?,
            guard: SessionGuard::new(codec.clone(), store),
            codec,
            access_token_ttl: settings.auth.access_token_ttl,
        })
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(settings: &Settings, store: Arc<dyn CredentialStore>) -> Result<Router, PasswordError> {
    let state = Arc::new(AppState::new(settings, store)?);

    // Protected routes: require a valid bearer token for an active user.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::auth_middleware,
    ));

    let api = routes::public_router()
        .merge(protected)
        .layer(Extension(state));

    let root = Router::new().route("/health", get(routes::system::health));
    let root = if settings.api_prefix.is_empty() {
        root.merge(api)
    } else {
        root.nest(&settings.api_prefix, api)
    };

    Ok(root.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
}
