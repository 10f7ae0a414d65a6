//! Weather by coordinates tool.
//!
//! Looks up the current conditions at a latitude/longitude pair. Range
//! checks happen before the provider is contacted.

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

/// Parameters for the coordinate lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherByCoordinatesParams {
    /// Latitude in decimal degrees.
    #[schemars(description = "Latitude in decimal degrees, between -90 and 90")]
    pub latitude: f64,

    /// Longitude in decimal degrees.
    #[schemars(description = "Longitude in decimal degrees, between -180 and 180")]
    pub longitude: f64,

    /// Measurement units.
    #[serde(default)]
    #[schemars(description = "Units: 'metric', 'imperial' or 'kelvin' (default: metric)")]
    pub units: Option<String>,
}

/// Weather by coordinates tool implementation.
#[derive(Debug, Clone)]
pub struct WeatherByCoordinatesTool;

impl WeatherByCoordinatesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather_by_coordinates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current weather at a latitude/longitude pair. Latitude must be within \
         [-90, 90] and longitude within [-180, 180]; units are optional (metric, \
         imperial or kelvin).";

    pub fn new() -> Self {
        Self
    }

    /// Execute the validate → fetch → render pipeline.
    pub async fn execute(
        params: &WeatherByCoordinatesParams,
        client: &WeatherClient,
    ) -> CallToolResult {
        info!(
            "Weather requested for coordinates: ({}, {})",
            params.latitude, params.longitude
        );

        let query = match WeatherQuery::by_coordinates(
            params.latitude,
            params.longitude,
            params.units.as_deref(),
        ) {
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
            input_schema: cached_schema_for_type::<WeatherByCoordinatesParams>(),
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
                let params: WeatherByCoordinatesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

impl Default for WeatherByCoordinatesTool {
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

    #[test]
    fn test_params_decode() {
        let json = r#"{"latitude": 52.52, "longitude": 13.405, "units": "kelvin"}"#;
        let params: WeatherByCoordinatesParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.latitude, 52.52);
        assert_eq!(params.longitude, 13.405);
        assert_eq!(params.units.as_deref(), Some("kelvin"));
    }

    #[tokio::test]
    async fn test_out_of_range_latitude_fails_without_outbound_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/weather").expect(0).create_async().await;

        let client = WeatherClient::new(&WeatherConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.url(),
            timeout_secs: 5,
        });

        let params = WeatherByCoordinatesParams {
            latitude: 95.0,
            longitude: 0.0,
            units: None,
        };
        let result = WeatherByCoordinatesTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("latitude"));
    }

    #[tokio::test]
    async fn test_execute_renders_conditions_at_coordinates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/weather")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".into(), "52.52".into()),
                mockito::Matcher::UrlEncoded("lon".into(), "13.405".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
                    "name": "Berlin",
                    "dt": 1736935200,
                    "main": {"temp": 2.4, "feels_like": -1.0, "humidity": 80},
                    "weather": [{"description": "light snow"}],
                    "wind": {"speed": 4.5, "deg": 90},
                    "sys": {"country": "DE"}
                }"#,
            )
            .create_async()
            .await;

        let client = WeatherClient::new(&WeatherConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.url(),
            timeout_secs: 5,
        });

        let params = WeatherByCoordinatesParams {
            latitude: 52.52,
            longitude: 13.405,
            units: None,
        };
        let result = WeatherByCoordinatesTool::execute(&params, &client).await;

        assert_ne!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("Berlin, DE"));
        assert!(text.contains("light snow"));
        assert!(text.contains("2.4°C"));
        assert!(text.contains("4.5 m/s E"));
    }
}
