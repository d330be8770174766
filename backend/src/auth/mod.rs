//! Authentication module
//!
//! Provides JWT-based authentication with argon2 password hashing,
//! dual-secret access/refresh tokens, and the request guards that
//! resolve a token into a trusted identity.

pub mod cookies;
mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{AuthUser, RefreshUser};
pub use password::PasswordService;
