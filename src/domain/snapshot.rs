//! Token Market Snapshot
//!
//! The value type produced by the data layer. A snapshot is immutable once
//! constructed and always fully populated: unknown identity fields fall back
//! to fixed placeholders and missing numeric fields default to zero.

use serde::{Deserialize, Serialize};

/// Placeholder name used when the provider does not know the token
pub const UNKNOWN_NAME: &str = "Unknown Token";
/// Placeholder ticker used when the provider does not know the token
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// Market snapshot for a single token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Unit price in USD
    pub price: f64,
    /// Market capitalization in USD
    pub market_cap: f64,
    /// Trading volume in USD over the provider's reporting window
    pub volume: f64,
    /// Holder count
    pub holders: u64,
    /// Pool liquidity in USD
    pub liquidity: f64,
    /// Price change over 24h, in percent (signed)
    pub change_24h: f64,
    /// Display name, placeholder when unknown
    pub name: String,
    /// Ticker symbol, placeholder when unknown
    pub symbol: String,
    /// Identifier of the data provider that produced this snapshot
    pub source: String,
}

impl TokenSnapshot {
    /// Whether the provider supplied a real token identity
    pub fn has_known_identity(&self) -> bool {
        self.name != UNKNOWN_NAME
    }

    /// Whether the 24h move exceeds the given threshold (percent, absolute)
    pub fn is_significant_move(&self, threshold_pct: f64) -> bool {
        self.change_24h.abs() > threshold_pct
    }
}
