//! Session service: registration, login, and refresh rotation
//!
//! The orchestration core of authentication. Collaborators (pool, JWT
//! service) are passed in explicitly; password work runs on the blocking
//! thread pool; every successful call mints a brand-new token pair.
//!
//! Field formats are checked at the route boundary before requests reach
//! this module; the only input shaping done here is email normalization.
//!
//! Unknown email and wrong password produce the identical `Unauthorized`
//! response so callers cannot probe which accounts exist.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crypto_portfolio_shared::types::{TokenPair, UserProfile};
use sqlx::PgPool;
use uuid::Uuid;

/// Stable message for every credential failure on login.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Session service for authentication operations
pub struct SessionService;

impl SessionService {
    /// Register a new user and establish a session.
    ///
    /// The email is normalized to lowercase before the uniqueness check and
    /// the insert, so `Foo@x.com` and `foo@x.com` are the same account. A
    /// duplicate insert that races past the existence check is caught by the
    /// unique index and surfaces as the same `Conflict`.
    pub async fn register(
        pool: &PgPool,
        jwt: &JwtService,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, ApiError> {
        let email = normalize_email(email);

        if UserRepository::find_by_email(pool, &email).await?.is_some() {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash on the blocking pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, name, &email, &password_hash)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ApiError::Conflict("Email already registered".to_string())
                }
                _ => ApiError::Database(e),
            })?;

        Self::issue_pair(jwt, user.id)
    }

    /// Login with email and password.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, ApiError> {
        let email = normalize_email(email);

        let user = UserRepository::find_by_email(pool, &email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Verify on the blocking pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        Self::issue_pair(jwt, user.id)
    }

    /// Rotate a refresh token into a new token pair.
    ///
    /// Any verification failure (bad signature, expired, malformed, access
    /// token presented instead of refresh) collapses to `Unauthorized`, as
    /// does an account that no longer exists. The presented token is not
    /// denylisted (stateless design); the client is expected to discard it
    /// in favor of the returned pair.
    pub async fn refresh(
        pool: &PgPool,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> Result<TokenPair, ApiError> {
        let claims = jwt
            .verify_refresh_token(refresh_token)
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let user_id = claims
            .user_id()
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        // The account must still exist at rotation time.
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        Self::issue_pair(jwt, user_id)
    }

    /// Get the profile of an authenticated user.
    pub async fn profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        })
    }

    fn issue_pair(jwt: &JwtService, user_id: Uuid) -> Result<TokenPair, ApiError> {
        let access_token = jwt.issue_access_token(user_id).map_err(ApiError::Internal)?;
        let refresh_token = jwt
            .issue_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

/// Lowercase the email so lookups and the unique index agree on case.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
