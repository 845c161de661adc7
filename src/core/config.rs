//! Configuration management for the search server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) and then shared read-only.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default Tavily search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.tavily.com/search";

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Remote search API settings.
    pub search: SearchConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Tavily API key, injected into every search payload.
    pub tavily_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "tavily_api_key",
                &self.tavily_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Remote search API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// URL search payloads are posted to.
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tavily-search".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). The search API is configured
    /// with `TAVILY_API_KEY` and `TAVILY_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(api_key) = std::env::var("TAVILY_API_KEY") {
            if !api_key.is_empty() {
                config.credentials.tavily_api_key = Some(api_key);
                info!("Tavily API key loaded from environment");
            }
        }

        if let Ok(endpoint) = std::env::var("TAVILY_API_URL") {
            info!("Using search endpoint override: {}", endpoint);
            config.search.endpoint = endpoint;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TAVILY_API_KEY", "tvly-test-12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.tavily_api_key.as_deref(),
            Some("tvly-test-12345")
        );
        unsafe {
            std::env::remove_var("TAVILY_API_KEY");
        }
    }

    #[test]
    fn test_empty_key_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TAVILY_API_KEY", "");
        }
        let config = Config::from_env();
        assert!(config.credentials.tavily_api_key.is_none());
        unsafe {
            std::env::remove_var("TAVILY_API_KEY");
        }
    }

    #[test]
    fn test_endpoint_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TAVILY_API_URL", "http://localhost:9999/search");
        }
        let config = Config::from_env();
        assert_eq!(config.search.endpoint, "http://localhost:9999/search");
        unsafe {
            std::env::remove_var("TAVILY_API_URL");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            tavily_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.credentials.tavily_api_key.is_none());
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
    }
}
