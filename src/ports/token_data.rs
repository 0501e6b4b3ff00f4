//! Token Data Port
//!
//! Trait seam between the cached client and the provider transport.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::snapshot::TokenSnapshot;

/// Errors surfaced by a token data source
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network failure or non-2xx response from the provider
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider responded but listed no tradable pool for the token
    #[error("no liquidity pools available for token {0}")]
    DataNotFound(String),
}

/// Market data provider for one fixed token
#[async_trait]
pub trait TokenDataSource: Send + Sync {
    /// Provider identifier stamped into produced snapshots
    fn source_name(&self) -> &str;

    /// Fetch one fresh snapshot from the provider
    async fn fetch_snapshot(&self) -> Result<TokenSnapshot, FetchError>;
}

#[async_trait]
impl<T: TokenDataSource + ?Sized> TokenDataSource for Arc<T> {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    async fn fetch_snapshot(&self) -> Result<TokenSnapshot, FetchError> {
        (**self).fetch_snapshot().await
    }
}
