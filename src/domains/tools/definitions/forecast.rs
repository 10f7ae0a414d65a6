//! Weather forecast tool.
//!
//! Looks up the 5-day / 3-hour forecast for a named place via the
//! OpenWeather forecast endpoint. Every entry of the provider response is
//! rendered; nothing is dropped or reordered.

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

/// Parameters for the forecast lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherForecastParams {
    /// City name, optionally suffixed with a country code.
    #[schemars(description = "City name, optionally with an ISO country code \
                              (e.g. 'Berlin' or 'Berlin,DE')")]
    pub location: String,

    /// Measurement units.
    #[serde(default)]
    #[schemars(description = "Units: 'metric', 'imperial' or 'kelvin' (default: metric)")]
    pub units: Option<String>,
}

/// Weather forecast tool implementation.
#[derive(Debug, Clone)]
pub struct WeatherForecastTool;

impl WeatherForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the 5-day weather forecast for a city in 3-hour steps. Accepts 'City' or \
         'City,CountryCode' and optional units (metric, imperial or kelvin). Each entry \
         lists its timestamp, temperature and conditions.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the validate → fetch → render pipeline.
    pub async fn execute(params: &WeatherForecastParams, client: &WeatherClient) -> CallToolResult {
        info!("Forecast requested for: {}", params.location);

        let query = match WeatherQuery::by_name(&params.location, params.units.as_deref()) {
            Ok(query) => query,
            Err(e) => return failure_result(&e),
        };

        match client.forecast(&query).await {
            Ok(forecast) => text_result(format::render_forecast(&forecast)),
            Err(e) => failure_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WeatherForecastParams>(),
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
                let params: WeatherForecastParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

impl Default for WeatherForecastTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_renders_one_block_per_entry() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/forecast")
            .match_query(mockito::Matcher::UrlEncoded("q".into(), "Berlin".into()))
            .with_status(200)
            .with_body(
                r#"{
                    "city": {"name": "Berlin", "country": "DE"},
                    "list": [
                        {"dt": 1736935200,
                         "main": {"temp": 2.4, "feels_like": -1.0, "humidity": 80},
                         "weather": [{"description": "light snow"}]},
                        {"dt": 1736946000,
                         "main": {"temp": 3.1, "feels_like": 0.2, "humidity": 75},
                         "weather": [{"description": "overcast clouds"}]}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = WeatherClient::new(&WeatherConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.url(),
            timeout_secs: 5,
        });

        let params = WeatherForecastParams {
            location: "Berlin".to_string(),
            units: None,
        };
        let result = WeatherForecastTool::execute(&params, &client).await;

        assert_ne!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Forecast for Berlin, DE:"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.find("light snow").unwrap() < text.find("overcast clouds").unwrap());
    }

    #[tokio::test]
    async fn test_execute_surfaces_location_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/forecast")
            .with_status(404)
            .with_body(r#"{"cod": "404", "message": "city not found"}"#)
            .create_async()
            .await;

        let client = WeatherClient::new(&WeatherConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.url(),
            timeout_secs: 5,
        });

        let params = WeatherForecastParams {
            location: "Nowhere".to_string(),
            units: None,
        };
        let result = WeatherForecastTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("location not found"));
        assert!(!text.contains("test-key"));
    }
}
