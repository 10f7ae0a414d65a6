//! Current weather tool.
//!
//! Looks up the current conditions for a named place via the OpenWeather
//! current-weather endpoint.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{failure_result, text_result};
use crate::domains::weather::{WeatherClient, WeatherQuery, format};

/// Parameters for the current weather lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CurrentWeatherParams {
    /// City name, optionally suffixed with a country code.
    #[schemars(description = "City name, optionally with an ISO country code \
                              (e.g. 'London' or 'London,GB')")]
    pub location: String,

    /// Measurement units.
    #[serde(default)]
    #[schemars(description = "Units: 'metric', 'imperial' or 'kelvin' (default: metric)")]
    pub units: Option<String>,
}

/// Current weather tool implementation.
#[derive(Debug, Clone)]
pub struct CurrentWeatherTool;

impl CurrentWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current weather for a city. Accepts 'City' or 'City,CountryCode' and \
         optional units (metric, imperial or kelvin). Returns temperature, feels-like, \
         conditions, humidity and wind.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the validate → fetch → render pipeline.
    pub async fn execute(params: &CurrentWeatherParams, client: &WeatherClient) -> CallToolResult {
        info!("Current weather requested for: {}", params.location);

        let query = match WeatherQuery::by_name(&params.location, params.units.as_deref()) {
            Ok(query) => query,
            Err(e) => return failure_result(&e),
        };

        match client.current(&query).await {
            Ok(report) => text_result(format::render_current(&report)),
            Err(e) => failure_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CurrentWeatherParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp transports.
    pub fn create_route<S>(client: Arc<WeatherClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: CurrentWeatherParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

impl Default for CurrentWeatherTool {
    fn default() -> Self {
        Self::new()
    }
}
