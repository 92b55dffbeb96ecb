use axum::{
    Router,
    routing::{get, post},
};

pub mod security;
pub mod system;

/// Routes reachable without a token.
pub fn public_router() -> Router {
    Router::new().route("/token", post(security::login_for_access_token))
}

/// Routes behind the bearer middleware (a `CurrentUser` is always present).
pub fn protected_router() -> Router {
    Router::new()
        .route("/users/me", get(security::read_users_me))
        .route("/users/me/items", get(security::read_own_items))
}
