//! Weather domain error types.

use thiserror::Error;

/// Failures produced by the weather lookup pipeline.
///
/// Every variant renders to a short human-readable message that is safe to
/// surface to the caller: the API credential and raw upstream bodies never
/// appear in it.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Bad or missing caller input. The provider is never contacted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or rejected API credential.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider could not resolve the requested place.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// Network failure or timeout talking to the provider. Single attempt,
    /// no retry.
    #[error("unable to reach weather service: {0}")]
    UpstreamUnavailable(String),

    /// The provider answered with a non-success status.
    #[error("weather service returned status {0}")]
    UpstreamStatus(u16),

    /// The provider answered 2xx but the payload had an unexpected shape.
    #[error("unexpected response from weather service: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new "location not found" error.
    pub fn location_not_found(place: impl Into<String>) -> Self {
        Self::LocationNotFound(place.into())
    }

    /// Create a new "upstream unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    /// Create a new "malformed response" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
