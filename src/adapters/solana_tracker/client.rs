//! SolanaTracker API Client
//!
//! HTTP client for the SolanaTracker data API. Fetches the market
//! snapshot for one fixed token address.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::domain::snapshot::TokenSnapshot;
use crate::ports::token_data::{FetchError, TokenDataSource};

use super::types::TokenResponse;

/// Provider identifier stamped into snapshots
pub const SOURCE_NAME: &str = "SolanaTracker";

/// Default base URL for the data API
pub const DEFAULT_BASE_URL: &str = "https://data.solanatracker.io";

/// SolanaTracker client configuration
#[derive(Debug, Clone)]
pub struct SolanaTrackerConfig {
    /// Base URL for the data API
    pub base_url: String,
    /// Token mint address to track (base58)
    pub token_address: String,
    /// API key sent in the x-api-key header
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SolanaTrackerConfig {
    /// Create a config for one token with default endpoint and timeout
    pub fn new(token_address: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_address: token_address.into(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the SolanaTracker token endpoint
#[derive(Debug, Clone)]
pub struct SolanaTrackerClient {
    config: SolanaTrackerConfig,
    http: Client,
}

impl SolanaTrackerClient {
    /// Create a client for one token with default configuration
    pub fn new(token_address: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_config(SolanaTrackerConfig::new(token_address))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: SolanaTrackerConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Tracked token address
    pub fn token_address(&self) -> &str {
        &self.config.token_address
    }

    /// Configured API base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn token_url(&self) -> String {
        format!(
            "{}/tokens/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.token_address
        )
    }
}

#[async_trait]
impl TokenDataSource for SolanaTrackerClient {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_snapshot(&self) -> Result<TokenSnapshot, FetchError> {
        let url = self.token_url();
        tracing::debug!(%url, "requesting token data");

        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Transport(format!(
                "SolanaTracker API error: {status}: {body}"
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to parse response: {e}")))?;

        let snapshot = parsed.into_snapshot(&self.config.token_address, SOURCE_NAME)?;

        tracing::debug!(
            price = snapshot.price,
            market_cap = snapshot.market_cap,
            holders = snapshot.holders,
            "token data fetched"
        );

        Ok(snapshot)
    }
}
