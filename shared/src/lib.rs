//! Crypto Portfolio Tracker Shared Library
//!
//! This crate contains the request/response types, models, and input
//! validation helpers shared between the backend and API consumers.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::PortfolioType;
pub use types::*;
