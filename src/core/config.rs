//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL for the OpenWeather REST API.
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default per-request timeout for provider calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Weather provider credential and endpoints.
    pub weather: WeatherConfig,
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

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the OpenWeather provider.
///
/// Constructed once at startup and passed into the weather client, so tests
/// can substitute fake credentials and endpoints without touching process
/// globals.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API key. Get a free key at: https://openweathermap.org/api
    pub api_key: Option<String>,

    /// Base URL of the provider API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENWEATHER_BASE_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`. The provider
    /// credential is also honored under its conventional name
    /// `OPENWEATHER_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the OpenWeather API key
        match std::env::var("MCP_OPENWEATHER_API_KEY")
            .or_else(|_| std::env::var("OPENWEATHER_API_KEY"))
        {
            Ok(api_key) if !api_key.trim().is_empty() => {
                config.weather.api_key = Some(api_key);
                info!("OpenWeather API key loaded from environment");
            }
            _ => {
                warn!(
                    "No OpenWeather API key configured; weather tools will fail \
                     until MCP_OPENWEATHER_API_KEY is set \
                     (get a key at https://openweathermap.org/api)"
                );
            }
        }

        if let Ok(base_url) = std::env::var("MCP_OPENWEATHER_BASE_URL") {
            config.weather.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.weather.timeout_secs = secs;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportConfig;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_weather_env() {
        unsafe {
            std::env::remove_var("MCP_OPENWEATHER_API_KEY");
            std::env::remove_var("OPENWEATHER_API_KEY");
            std::env::remove_var("MCP_OPENWEATHER_BASE_URL");
            std::env::remove_var("MCP_TRANSPORT");
        }
    }

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_weather_env();
        unsafe {
            std::env::set_var("MCP_OPENWEATHER_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.api_key.as_deref(), Some("test_key_12345"));
        clear_weather_env();
    }

    #[test]
    fn test_api_key_conventional_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_weather_env();
        unsafe {
            std::env::set_var("OPENWEATHER_API_KEY", "fallback_key");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.api_key.as_deref(), Some("fallback_key"));
        clear_weather_env();
    }

    #[test]
    fn test_api_key_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_weather_env();
        let config = Config::from_env();
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_weather_env();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "stdio");
        }
        let config = Config::from_env();
        assert!(config.transport.is_stdio());
        clear_weather_env();

        let config = Config::from_env();
        assert!(matches!(config.transport, TransportConfig::Sse(_)));
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let weather = WeatherConfig {
            api_key: Some("super_secret_key".to_string()),
            ..WeatherConfig::default()
        };
        let debug_str = format!("{:?}", weather);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_provider_endpoint() {
        let config = Config::default();
        assert_eq!(config.weather.base_url, OPENWEATHER_BASE_URL);
        assert_eq!(config.weather.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }
}
