//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod portfolio;
pub mod user;

pub use portfolio::{PortfolioRecord, PortfolioRepository};
pub use user::{UserRecord, UserRepository};
