//! Password login and the endpoints that require its token.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use gatehouse_auth::Credential;

use crate::app::{AppState, dto, errors};
use crate::context::CurrentUser;

/// `POST /token` with form fields `username` and `password`.
///
/// bcrypt runs on the blocking pool; a failed login never says which field
/// was wrong.
pub async fn login_for_access_token(
    Extension(state): Extension<Arc<AppState>>,
    Form(credential): Form<Credential>,
) -> axum::response::Response {
    let auth_state = state.clone();
    let outcome =
        tokio::task::spawn_blocking(move || auth_state.authenticator.authenticate_credential(&credential)).await;

    let user = match outcome {
        Ok(Ok(user)) => user,
        Ok(Err(failure)) => return errors::auth_failure_response(failure),
        Err(e) => {
            tracing::error!(error = %e, "login task failed");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error");
        }
    };

    match state
        .codec
        .issue(user.username.as_str(), state.access_token_ttl, Utc::now())
    {
        Ok(token) => {
            tracing::info!(username = %user.username, "access token issued");
            (StatusCode::OK, Json(token)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token issue failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_issue_failed",
                "could not issue token",
            )
        }
    }
}

pub async fn read_users_me(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    Json(dto::UserOut::from(current.user()))
}

pub async fn read_own_items(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    Json(vec![dto::OwnedItem {
        item_id: "Foo".to_string(),
        owner: current.username().to_string(),
    }])
}
