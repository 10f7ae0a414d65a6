//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over Server-Sent Events (default run mode).
    Sse(SseConfig),

    /// Standard input/output transport.
    Stdio,
}

/// SSE transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SseConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Listen port of the original weather service, kept as the default.
fn default_port() -> u16 {
    3050
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Sse(SseConfig::default())
    }
}

impl Default for SseConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an SSE transport config.
    pub fn sse(port: u16, host: impl Into<String>) -> Self {
        Self::Sse(SseConfig {
            port,
            host: host.into(),
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "stdio" => Self::Stdio,
            _ => {
                let port = std::env::var("MCP_SSE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_port);
                let host = std::env::var("MCP_SSE_HOST").unwrap_or_else(|_| default_host());
                Self::Sse(SseConfig { port, host })
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Sse(cfg) => format!("SSE on {}:{}", cfg.host, cfg.port),
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }

    /// Check if this transport is the STDIO mode.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Self::Stdio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sse() {
        let config = TransportConfig::default();
        assert!(!config.is_stdio());
        match config {
            TransportConfig::Sse(cfg) => {
                assert_eq!(cfg.port, 3050);
                assert_eq!(cfg.host, "127.0.0.1");
            }
            TransportConfig::Stdio => panic!("expected SSE default"),
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(
            TransportConfig::sse(3050, "127.0.0.1").description(),
            "SSE on 127.0.0.1:3050"
        );
        assert_eq!(
            TransportConfig::stdio().description(),
            "STDIO (standard MCP mode)"
        );
    }
}
