//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the weather tool pipeline.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines a parameters struct, an `execute()` pipeline and a
//! route constructor. The ToolRouter is built dynamically in
//! `domains/tools/router.rs`, so adding a tool does not require modifying
//! this file.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::domains::weather::WeatherClient;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and wires the
/// weather client into the registered tool routes.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client for the weather provider, shared by all tool invocations.
    weather_client: Arc<WeatherClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let weather_client = Arc::new(WeatherClient::new(&config.weather));

        Self {
            tool_router: build_tool_router::<Self>(weather_client.clone()),
            config,
            weather_client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all registered tools (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Dispatch a tool invocation outside of a transport.
    ///
    /// Transports go through the rmcp `ToolRouter`; this entry point serves
    /// embedders and tests that call tools directly by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::core::Result<CallToolResult> {
        let registry = ToolRegistry::new(self.weather_client.clone());
        Ok(registry.call_tool(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Weather lookup server backed by the OpenWeather API. Use \
                 get_current_weather or get_weather_forecast with a city name, \
                 or get_weather_by_coordinates with a latitude/longitude pair."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_exposes_weather_tools() {
        let server = McpServer::new(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_current_weather"));
        assert!(names.contains(&"get_weather_forecast"));
        assert!(names.contains(&"get_weather_by_coordinates"));
    }

    #[tokio::test]
    async fn test_call_tool_rejects_unknown_name() {
        let server = McpServer::new(Config::default());
        let result = server.call_tool("get_moon_phase", serde_json::json!({})).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown tool"));
    }
}
