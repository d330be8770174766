//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the token layer.

pub mod ownership;
pub mod portfolio;
pub mod session;

pub use portfolio::PortfolioService;
pub use session::SessionService;
