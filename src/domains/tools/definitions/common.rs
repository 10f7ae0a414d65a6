//! Shared helpers for the weather tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::domains::weather::WeatherError;

/// Convert a pipeline failure into an MCP error result.
///
/// The error's display form is what clients see; credentials and raw
/// upstream bodies never reach it.
pub fn failure_result(error: &WeatherError) -> CallToolResult {
    warn!("{error}");
    CallToolResult::error(vec![Content::text(error.to_string())])
}

/// Wrap a rendered report into an MCP success result.
pub fn text_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_failure_result_carries_display_form() {
        let result = failure_result(&WeatherError::location_not_found("Atlantis"));
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "location not found: Atlantis"),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_text_result_is_success() {
        let result = text_result("sunny".to_string());
        assert_ne!(result.is_error, Some(true));
    }
}
