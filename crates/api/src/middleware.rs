use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::app::{AppState, errors};
use crate::context::CurrentUser;

/// Resolve the bearer token and attach the user to the request.
///
/// Rejections carry `WWW-Authenticate: Bearer`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).ok_or_else(errors::not_authenticated)?;

    let user = state
        .guard
        .resolve(token, Utc::now())
        .map_err(errors::session_error_response)?;

    req.extensions_mut().insert(CurrentUser::new(user));

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`; the scheme is case-insensitive.
pub(crate) fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;

    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}
