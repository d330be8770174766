//! Domain models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of portfolio a user can track.
///
/// Stored as lowercase text in the database and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioType {
    /// Self-custodied wallet (e.g. hardware or browser wallet)
    Wallet,
    /// Exchange-held account
    Exchange,
    /// Manually tracked positions
    Manual,
}

impl fmt::Display for PortfolioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortfolioType::Wallet => "wallet",
            PortfolioType::Exchange => "exchange",
            PortfolioType::Manual => "manual",
        };
        f.write_str(s)
    }
}

impl FromStr for PortfolioType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wallet" => Ok(PortfolioType::Wallet),
            "exchange" => Ok(PortfolioType::Exchange),
            "manual" => Ok(PortfolioType::Manual),
            other => Err(format!("type must be one of wallet, exchange, manual (got '{other}')")),
        }
    }
}
