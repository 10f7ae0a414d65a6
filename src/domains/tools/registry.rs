//! Tool Registry - central registration and dispatch for all tools.
//!
//! The rmcp `ToolRouter` serves the transports; this registry is the
//! transport-independent surface used to list tool metadata and to dispatch
//! an invocation by name.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};

use super::definitions::{CurrentWeatherTool, WeatherByCoordinatesTool, WeatherForecastTool};
use super::error::ToolError;
use crate::domains::weather::WeatherClient;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<WeatherClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<WeatherClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CurrentWeatherTool::NAME,
            WeatherForecastTool::NAME,
            WeatherByCoordinatesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the available tools; the
    /// router builds its routes from the same definitions.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CurrentWeatherTool::to_tool(),
            WeatherForecastTool::to_tool(),
            WeatherByCoordinatesTool::to_tool(),
        ]
    }

    /// Dispatch a tool invocation to the appropriate handler.
    ///
    /// Pipeline failures (bad input, provider errors) come back inside the
    /// `CallToolResult`; only routing failures - an unknown name or an
    /// undecodable argument mapping - are `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            CurrentWeatherTool::NAME => {
                let params = decode(arguments)?;
                Ok(CurrentWeatherTool::execute(&params, &self.client).await)
            }
            WeatherForecastTool::NAME => {
                let params = decode(arguments)?;
                Ok(WeatherForecastTool::execute(&params, &self.client).await)
            }
            WeatherByCoordinatesTool::NAME => {
                let params = decode(arguments)?;
                Ok(WeatherByCoordinatesTool::execute(&params, &self.client).await)
            }
            _ => Err(ToolError::unknown_tool(name)),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
