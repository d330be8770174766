//! Refresh token cookie handling
//!
//! The refresh token travels exclusively in an HTTP-only cookie. It is set
//! at registration, login, and refresh, and cleared at logout. It never
//! appears in a JSON body, so scripts on the client cannot read it.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Build the HTTP-only refresh token cookie.
///
/// `max_age_secs` should match the refresh token expiration so the cookie
/// and the signed claim lapse together.
pub fn refresh_cookie(token: &str, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), token.to_string()))
        .http_only(true)
        .secure(false) // TODO: set true once TLS termination is in place
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build an expired cookie that clears the refresh token on the client.
///
/// Logout is client-side only: a still-valid refresh token is not revoked
/// server-side (stateless tokens, no denylist).
pub fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), String::new()))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::ZERO)
        .build()
}
