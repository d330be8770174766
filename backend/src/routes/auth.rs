//! Authentication routes
//!
//! Endpoints for registration, login, token refresh, logout, and the
//! current-user profile.
//!
//! Wire contract: the access token is returned in the JSON body; the
//! refresh token travels only in the `refresh_token` HTTP-only cookie set
//! here and is read back exclusively from that cookie on refresh.

use crate::auth::cookies::{clear_refresh_cookie, refresh_cookie};
use crate::auth::{AuthUser, JwtService, RefreshUser};
use crate::error::{ApiError, ApiResult};
use crate::services::SessionService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::CookieJar;
use crypto_portfolio_shared::types::{
    AuthResponse, LoginRequest, MessageResponse, RegisterRequest, TokenPair, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/me", axum::routing::get(get_profile))
}

/// Split a token pair into the response body and the refresh cookie.
fn session_response(jwt: &JwtService, jar: CookieJar, pair: TokenPair) -> (CookieJar, Json<AuthResponse>) {
    let jar = jar.add(refresh_cookie(
        &pair.refresh_token,
        jwt.refresh_token_expiry_secs(),
    ));
    let body = Json(AuthResponse {
        access_token: pair.access_token,
        token_type: "Bearer".to_string(),
        expires_in: jwt.access_token_expiry_secs(),
    });
    (jar, body)
}

/// Register a new user
///
/// POST /api/v1/auth/register
///
/// Field formats are checked here, at the boundary; the session core only
/// normalizes what it receives.
async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    req.validate().map_err(ApiError::Validation)?;

    let pair = SessionService::register(
        state.db(),
        state.jwt(),
        &req.name,
        &req.email,
        &req.password,
    )
    .await?;

    let (jar, body) = session_response(state.jwt(), jar, pair);
    Ok((StatusCode::CREATED, jar, body))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let pair = SessionService::login(state.db(), state.jwt(), &req.email, &req.password).await?;
    Ok(session_response(state.jwt(), jar, pair))
}

/// Rotate the refresh token into a new pair
///
/// POST /api/v1/auth/refresh
///
/// Guarded by [`RefreshUser`]: the request must carry a valid refresh
/// cookie or it is rejected before this handler runs. The presented token
/// is rotated; the new refresh token replaces the cookie.
async fn refresh(
    State(state): State<AppState>,
    refresh_user: RefreshUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let pair = SessionService::refresh(state.db(), state.jwt(), &refresh_user.token).await?;
    Ok(session_response(state.jwt(), jar, pair))
}

/// Logout by clearing the refresh cookie
///
/// POST /api/v1/auth/logout
///
/// Client-side only: no server state changes and a still-valid refresh
/// token is not revoked.
async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_refresh_cookie());
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Get current user profile (requires authentication)
///
/// GET /api/v1/auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = SessionService::profile(state.db(), auth_user.user_id).await?;
    Ok(Json(profile))
}
