//! API request and response types

use crate::models::PortfolioType;
use crate::validation::{validate_email, validate_name, validate_password};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Access/refresh token pair produced at registration, login, and refresh.
///
/// This is the internal session handoff shape. On the wire the refresh token
/// travels only in an HTTP-only cookie, never in a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication response body (access token only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Field format checks, applied at the route boundary. The session core
    /// receives only requests that already passed them.
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Simple confirmation message (logout, delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Portfolios
// ============================================================================

/// Create portfolio request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePortfolioRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PortfolioType,
}

impl CreatePortfolioRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

/// Update portfolio request (name only, matching the reference API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePortfolioRequest {
    pub name: String,
}

impl UpdatePortfolioRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

/// Portfolio response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PortfolioType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
