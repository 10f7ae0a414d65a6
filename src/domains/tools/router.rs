//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter served over the SSE and STDIO
//! transports by delegating to the tool definitions themselves. Each tool
//! knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{CurrentWeatherTool, WeatherByCoordinatesTool, WeatherForecastTool};
use crate::domains::weather::WeatherClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<WeatherClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CurrentWeatherTool::create_route(client.clone()))
        .with_route(WeatherForecastTool::create_route(client.clone()))
        .with_route(WeatherByCoordinatesTool::create_route(client))
}
