//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching the
//! config/default.toml structure.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub token: TokenSection,
    pub api: ApiSection,
    pub tracker: TrackerSection,
    pub logging: LoggingSection,
}

/// Tracked token section
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSection {
    /// Token mint address (base58)
    pub address: String,
    /// Symbol shown in the display headline before live data arrives
    pub symbol: String,
}

/// SolanaTracker API section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// Data API base URL
    pub base_url: String,
    /// API key sent with every request (environment variable overrides)
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How long a fetched snapshot stays fresh, in milliseconds
    pub freshness_window_ms: u64,
}

impl ApiSection {
    /// API key with environment variable override.
    /// Checks SOLANA_TRACKER_API_KEY first, falls back to the config value.
    pub fn get_api_key(&self) -> String {
        std::env::var("SOLANA_TRACKER_API_KEY").unwrap_or_else(|_| self.api_key.clone())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Freshness window as a Duration
    pub fn freshness_window(&self) -> Duration {
        Duration::from_millis(self.freshness_window_ms)
    }
}

/// Tracker loop section
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerSection {
    /// Seconds between poll ticks
    pub poll_interval_secs: u64,
    /// 24h move (percent) that triggers an alert line
    pub alert_threshold_pct: f64,
}

impl TrackerSection {
    /// Poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.address.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "token.address must not be empty".to_string(),
            ));
        }

        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url must not be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > 300 {
            return Err(ConfigError::ValidationError(format!(
                "api.timeout_secs must be 1-300, got {}",
                self.api.timeout_secs
            )));
        }

        if self.api.freshness_window_ms == 0 {
            return Err(ConfigError::ValidationError(
                "api.freshness_window_ms must be > 0".to_string(),
            ));
        }

        if self.tracker.poll_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "tracker.poll_interval_secs must be > 0".to_string(),
            ));
        }

        if self.tracker.alert_threshold_pct < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tracker.alert_threshold_pct must be >= 0, got {}",
                self.tracker.alert_threshold_pct
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace/debug/info/warn/error, got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_TOML: &str = r#"
[token]
address = "ErTuAgyNFjdLSQkkdmTTUKpZNaiiRXmtE6ifHdZCpump"
symbol = "PONZI"

[api]
base_url = "https://data.solanatracker.io"
api_key = "from-config"
timeout_secs = 10
freshness_window_ms = 30000

[tracker]
poll_interval_secs = 30
alert_threshold_pct = 10.0

[logging]
level = "info"
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(VALID_TOML);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.token.symbol, "PONZI");
        assert_eq!(config.api.freshness_window(), Duration::from_secs(30));
        assert_eq!(config.tracker.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let file = write_config("[token]\naddress = \"x\"\nsymbol = \"X\"\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_address_rejected() {
        let file = write_config(&VALID_TOML.replace(
            "address = \"ErTuAgyNFjdLSQkkdmTTUKpZNaiiRXmtE6ifHdZCpump\"",
            "address = \"  \"",
        ));
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let file = write_config(&VALID_TOML.replace(
            "poll_interval_secs = 30",
            "poll_interval_secs = 0",
        ));
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_freshness_window_rejected() {
        let file = write_config(&VALID_TOML.replace(
            "freshness_window_ms = 30000",
            "freshness_window_ms = 0",
        ));
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let file = write_config(&VALID_TOML.replace("level = \"info\"", "level = \"loud\""));
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_api_key_defaults_empty_and_env_overrides() {
        let file = write_config(&VALID_TOML.replace("api_key = \"from-config\"\n", ""));
        let config = load_config(file.path()).unwrap();
        assert!(config.api.api_key.is_empty());

        std::env::set_var("SOLANA_TRACKER_API_KEY", "from-env");
        assert_eq!(config.api.get_api_key(), "from-env");
        std::env::remove_var("SOLANA_TRACKER_API_KEY");
    }
}
