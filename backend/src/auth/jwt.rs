//! JWT token generation and validation
//!
//! Issues and verifies the access/refresh token pair. The two token kinds are
//! signed with independent secrets and verified through segregated key pairs,
//! so an access token can never pass refresh verification or vice versa.
//!
//! Expiration is checked strictly against wall-clock time at verification
//! (leeway is 0; no clock skew tolerance).

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Unique token ID. Guarantees every issued token is distinct (two
    /// tokens minted for the same user within the same second still differ)
    /// and gives a future revocation list something to key on.
    pub jti: String,
}

impl Claims {
    /// Parse the subject claim as a user ID
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}

/// Pre-computed signing/verification keys for one token kind.
/// Keys are expensive to derive, so they are created once at startup
/// and shared via Arc.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create keys from a secret. Call once at startup.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Holds one pre-computed key pair per token kind. Cloning is cheap
/// (Arc increments), so the service lives in AppState and is shared
/// across handlers.
#[derive(Clone)]
pub struct JwtService {
    access_keys: JwtKeys,
    refresh_keys: JwtKeys,
    access_token_expiry_secs: i64,
    refresh_token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys.
    ///
    /// The two secrets must differ; that invariant is enforced by config
    /// validation at startup, not re-checked here.
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_token_expiry_secs: i64,
        refresh_token_expiry_secs: i64,
    ) -> Self {
        Self {
            access_keys: JwtKeys::new(access_secret),
            refresh_keys: JwtKeys::new(refresh_secret),
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }

    /// Issue an access token for a user
    #[inline]
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String> {
        self.issue_token(user_id, &self.access_keys, self.access_token_expiry_secs)
    }

    /// Issue a refresh token for a user
    #[inline]
    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String> {
        self.issue_token(user_id, &self.refresh_keys, self.refresh_token_expiry_secs)
    }

    fn issue_token(&self, user_id: Uuid, keys: &JwtKeys, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Verify an access token and return its claims
    #[inline]
    pub fn verify_access_token(&self, token: &str) -> Result<Claims> {
        Self::verify_token(token, &self.access_keys)
    }

    /// Verify a refresh token and return its claims
    #[inline]
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims> {
        Self::verify_token(token, &self.refresh_keys)
    }

    fn verify_token(token: &str, keys: &JwtKeys) -> Result<Claims> {
        let mut validation = Validation::default();
        // Strict expiration: expired means expired, no skew allowance.
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &keys.decoding, &validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Get access token expiry in seconds
    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_secs
    }

    /// Get refresh token expiry in seconds (drives the cookie max-age)
    #[inline]
    pub fn refresh_token_expiry_secs(&self) -> i64 {
        self.refresh_token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-access-secret", "test-refresh-secret", 900, 2_592_000)
    }

    #[test]
    fn test_issue_and_verify_access_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_access_token(user_id).unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_issue_and_verify_refresh_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_refresh_token(user_id).unwrap();
        let claims = service.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_access_token_rejected_by_refresh_verification() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_access_token(user_id).unwrap();
        assert!(service.verify_refresh_token(&token).is_err());
    }

    #[test]
    fn test_refresh_token_rejected_by_access_verification() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_refresh_token(user_id).unwrap();
        assert!(service.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();
        assert!(service.verify_access_token("invalid.token.here").is_err());
        assert!(service.verify_refresh_token("").is_err());
    }

    #[test]
    fn test_token_from_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("other-access", "other-refresh", 900, 2_592_000);
        let user_id = Uuid::new_v4();

        let token = other.issue_access_token(user_id).unwrap();
        assert!(service.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected_strictly() {
        // Expiry in the past; leeway is 0 so verification must fail
        // immediately, not within some skew window.
        let service = JwtService::new("a-secret", "r-secret", -10, -10);
        let user_id = Uuid::new_v4();

        let token = service.issue_access_token(user_id).unwrap();
        assert!(service.verify_access_token(&token).is_err());

        let refresh = service.issue_refresh_token(user_id).unwrap();
        assert!(service.verify_refresh_token(&refresh).is_err());
    }

    #[test]
    fn test_consecutive_tokens_are_unique() {
        // jti randomization: two tokens for the same user in the same
        // second must still differ (rotation guarantee).
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let first = service.issue_refresh_token(user_id).unwrap();
        let second = service.issue_refresh_token(user_id).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
