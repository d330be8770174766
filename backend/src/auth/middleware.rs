//! Authentication guards
//!
//! Axum extractors that turn a verified token into a trusted identity.
//! Handlers receive the identity as an explicit parameter; a request whose
//! extraction fails is rejected before any domain logic runs.
//!
//! Two guard variants exist, one per credential:
//! - [`AuthUser`] reads the bearer access token from the Authorization header.
//! - [`RefreshUser`] reads the refresh token strictly from its cookie.
//!
//! Both verify the token with the segregated key for their kind and then
//! re-resolve the subject against the user table, so a token for a deleted
//! account is rejected with `Unauthorized`.

use crate::auth::cookies::REFRESH_COOKIE;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

/// Trusted identity resolved from a valid access token.
///
/// Request-scoped projection of the stored user record.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let claims = app_state
            .jwt()
            .verify_access_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid access token".to_string()))?;

        let user_id = claims
            .user_id()
            .map_err(|_| ApiError::Unauthorized("Invalid access token".to_string()))?;

        // The token only proves past authentication; the account must still
        // exist now.
        let user = UserRepository::find_by_id(app_state.db(), user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid access token".to_string()))?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}

/// Identity resolved from a valid refresh token cookie.
///
/// Carries the raw token as well, since the refresh endpoint rotates the
/// presented token into a new pair.
#[derive(Debug, Clone)]
pub struct RefreshUser {
    pub user_id: Uuid,
    pub token: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RefreshUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // The refresh token is accepted from its cookie only, never from a
        // header or body field.
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(REFRESH_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| ApiError::Unauthorized("Refresh token missing".to_string()))?;

        let claims = app_state
            .jwt()
            .verify_refresh_token(&token)
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let user_id = claims
            .user_id()
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let user = UserRepository::find_by_id(app_state.db(), user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        Ok(RefreshUser {
            user_id: user.id,
            token,
        })
    }
}
