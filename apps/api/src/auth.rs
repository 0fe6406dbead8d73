//! Session gate for page routes.
//!
//! Only token *presence* is checked here; validating the token belongs to the
//! session provider that issued it.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";

/// Path prefixes reachable without a session.
pub const PUBLIC_PREFIXES: &[&str] = &["/login", "/signup", "/api", "/auth", "/health"];

/// Lets public and static-asset requests through, redirects everything else
/// to the login page unless the request carries a session token.
pub async fn require_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    if is_public_path(&path) || is_static_asset(&path) {
        return next.run(request).await;
    }

    if has_session_token(&headers, &state.config.session_cookie_name) {
        return next.run(request).await;
    }

    tracing::info!("No session token for {path}, redirecting to {LOGIN_PATH}");
    Redirect::temporary(LOGIN_PATH).into_response()
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Build output and files with an extension (favicon.ico, styles.css, ...).
pub fn is_static_asset(path: &str) -> bool {
    path.starts_with("/_next/")
        || path
            .rsplit('/')
            .next()
            .is_some_and(|segment| segment.contains('.'))
}

fn has_session_token(headers: &HeaderMap, cookie_name: &str) -> bool {
    let jar = CookieJar::from_headers(headers);
    if jar
        .get(cookie_name)
        .is_some_and(|cookie| !cookie.value().is_empty())
    {
        return true;
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty())
}
