//! SSE transport implementation.
//!
//! MCP over Server-Sent Events: clients open a long-lived event stream with
//! `GET /sse` and post JSON-RPC messages to `POST /message`. Framing and
//! session management are handled by rmcp's `SseServer`.

use rmcp::transport::SseServer;
use tracing::info;

use super::config::SseConfig;
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// SSE transport handler.
pub struct SseTransport {
    config: SseConfig,
}

impl SseTransport {
    /// Create a new SSE transport with the given config.
    pub fn new(config: SseConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the SSE transport until the process receives Ctrl-C.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let socket_addr = addr
            .parse()
            .map_err(|_| TransportError::InvalidAddress(addr.clone()))?;

        let ct = SseServer::serve(socket_addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?
            .with_service(move || server.clone());

        info!("Ready - listening on {} (MCP over SSE)", addr);
        info!("  → Event stream: GET /sse");
        info!("  → Messages:     POST /message");

        tokio::signal::ctrl_c().await?;

        info!("Shutdown signal received");
        ct.cancel();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        let transport = SseTransport::new(SseConfig {
            port: 3050,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(transport.address(), "0.0.0.0:3050");
    }
}
