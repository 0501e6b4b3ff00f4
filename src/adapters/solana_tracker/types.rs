//! SolanaTracker Wire Types
//!
//! Response shape for `GET /tokens/{address}`. Extraction is deliberately
//! permissive: numeric fields may arrive as JSON numbers or numeric
//! strings, and any missing, null, or wrongly-typed field coerces to its
//! zero/placeholder default. Only a missing pool list is fatal.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::snapshot::{TokenSnapshot, UNKNOWN_NAME, UNKNOWN_SYMBOL};
use crate::ports::token_data::FetchError;

/// Fields consumed from a token lookup, extracted permissively from the
/// raw body
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Value")]
pub struct TokenResponse {
    /// `token.name`, when present and non-empty
    pub name: Option<String>,
    /// `token.symbol`, when present and non-empty
    pub symbol: Option<String>,
    /// One entry per listed pool; empty when the provider lists none
    pub pools: Vec<PoolStats>,
    /// `holders`, zero when absent or malformed
    pub holders: u64,
    /// `events["24h"].priceChangePercentage`, zero when absent
    pub change_24h: f64,
}

/// Numeric fields of one pool entry
#[derive(Debug, Clone, PartialEq)]
pub struct PoolStats {
    pub price_usd: f64,
    pub market_cap_usd: f64,
    pub volume_usd: f64,
    pub liquidity_usd: f64,
}

impl From<Value> for TokenResponse {
    fn from(body: Value) -> Self {
        let pools = body
            .get("pools")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(PoolStats::from_entry).collect())
            .unwrap_or_default();

        Self {
            name: string_field(&body, "/token/name"),
            symbol: string_field(&body, "/token/symbol"),
            pools,
            holders: coerce_u64(body.get("holders")),
            change_24h: coerce_f64(body.pointer("/events/24h/priceChangePercentage")),
        }
    }
}

impl PoolStats {
    fn from_entry(entry: &Value) -> Self {
        Self {
            price_usd: coerce_f64(entry.pointer("/price/usd")),
            market_cap_usd: coerce_f64(entry.pointer("/marketCap/usd")),
            volume_usd: coerce_f64(entry.pointer("/txns/volume")),
            liquidity_usd: coerce_f64(entry.pointer("/liquidity/usd")),
        }
    }
}

impl TokenResponse {
    /// Convert into a fully-populated snapshot using the first pool.
    ///
    /// Fails only when the provider lists no pool for the token; every
    /// other missing field falls back to its placeholder or zero.
    pub fn into_snapshot(
        self,
        token_address: &str,
        source: &str,
    ) -> Result<TokenSnapshot, FetchError> {
        let pool = self
            .pools
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::DataNotFound(token_address.to_string()))?;

        Ok(TokenSnapshot {
            price: pool.price_usd.max(0.0),
            market_cap: pool.market_cap_usd.max(0.0),
            volume: pool.volume_usd.max(0.0),
            holders: self.holders,
            liquidity: pool.liquidity_usd.max(0.0),
            change_24h: self.change_24h,
            name: self.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            symbol: self.symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
            source: source.to_string(),
        })
    }
}

fn string_field(body: &Value, pointer: &str) -> Option<String> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numbers pass through, numeric strings parse, anything else is zero
fn coerce_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Like [`coerce_f64`], truncating and clamping at zero
fn coerce_u64(value: Option<&Value>) -> u64 {
    let f = coerce_f64(value);
    if f.is_finite() && f > 0.0 {
        f as u64
    } else {
        0
    }
}
