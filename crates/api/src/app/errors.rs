use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;

use gatehouse_auth::{AuthFailure, SessionError};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// JSON error plus the `WWW-Authenticate: Bearer` challenge.
pub fn bearer_challenge(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let mut resp = json_error(status, code, message);
    resp.headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    resp
}

/// No usable `Authorization: Bearer` header.
pub fn not_authenticated() -> axum::response::Response {
    bearer_challenge(StatusCode::UNAUTHORIZED, "not_authenticated", "Not authenticated")
}

/// Unknown user and wrong password render identically.
pub fn auth_failure_response(failure: AuthFailure) -> axum::response::Response {
    bearer_challenge(
        StatusCode::UNAUTHORIZED,
        "invalid_credentials",
        failure.public_message(),
    )
}

pub fn session_error_response(err: SessionError) -> axum::response::Response {
    match err {
        SessionError::Unauthenticated => bearer_challenge(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "Could not validate credentials",
        ),
        SessionError::Inactive => {
            bearer_challenge(StatusCode::BAD_REQUEST, "inactive_user", "Inactive user")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(resp: &axum::response::Response) -> Option<&str> {
        resp.headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn auth_failures_are_indistinguishable() {
        let unknown = auth_failure_response(AuthFailure::UnknownUser);
        let bad = auth_failure_response(AuthFailure::BadCredentials);

        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(challenge(&unknown), Some("Bearer"));
        assert_eq!(challenge(&bad), Some("Bearer"));
    }

    #[test]
    fn session_errors_map_to_status() {
        let unauth = session_error_response(SessionError::Unauthenticated);
        assert_eq!(unauth.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(challenge(&unauth), Some("Bearer"));

        let inactive = session_error_response(SessionError::Inactive);
        assert_eq!(inactive.status(), StatusCode::BAD_REQUEST);
        assert_eq!(challenge(&inactive), Some("Bearer"));
    }

    #[test]
    fn missing_header_challenges() {
        let resp = not_authenticated();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(challenge(&resp), Some("Bearer"));
    }
}
