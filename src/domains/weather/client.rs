//! OpenWeather HTTP client.
//!
//! Issues exactly one outbound GET per lookup and maps the provider's
//! responses and failures onto [`WeatherError`]. There is no caching and no
//! retry: every call re-queries the provider, and a failed attempt is
//! reported as-is.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::WeatherError;
use super::model::{CurrentConditions, Forecast, ForecastEntry, Place, Units, WeatherQuery};
use crate::core::config::WeatherConfig;

/// Client for the OpenWeather REST API.
///
/// Holds the credential and endpoint configuration; connection pooling lives
/// inside the underlying `reqwest::Client`.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl WeatherClient {
    /// Create a new client from the provider configuration.
    ///
    /// A blank credential is treated as absent, so lookups fail fast with a
    /// configuration error instead of a provider rejection.
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Fetch current conditions for the queried place.
    pub async fn current(&self, query: &WeatherQuery) -> Result<CurrentConditions, WeatherError> {
        let body = self.fetch("weather", query).await?;
        map_current(&body, query.units)
    }

    /// Fetch the 5-day / 3-hour forecast for the queried place.
    pub async fn forecast(&self, query: &WeatherQuery) -> Result<Forecast, WeatherError> {
        let body = self.fetch("forecast", query).await?;
        map_forecast(&body, query.units)
    }

    fn credential(&self) -> Result<&str, WeatherError> {
        self.api_key.as_deref().ok_or_else(|| {
            WeatherError::configuration(
                "OpenWeather API key is not configured (set MCP_OPENWEATHER_API_KEY)",
            )
        })
    }

    /// Perform the single GET against one of the provider endpoints and
    /// return the raw body on success.
    async fn fetch(&self, endpoint: &str, query: &WeatherQuery) -> Result<String, WeatherError> {
        let api_key = self.credential()?;
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut request = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .query(&[("appid", api_key), ("units", query.units.api_value())]);

        request = match &query.place {
            Place::Named(name) => request.query(&[("q", name.as_str())]),
            Place::Coordinates {
                latitude,
                longitude,
            } => request.query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ]),
        };

        debug!("GET /{} for {}", endpoint, query.place);

        // reqwest errors can echo the request URL, which carries the
        // credential as a query parameter; strip it before reporting.
        let response = request
            .send()
            .await
            .map_err(|e| WeatherError::unavailable(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::location_not_found(query.place.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::configuration(
                "OpenWeather rejected the configured API key",
            ));
        }
        if !status.is_success() {
            warn!("OpenWeather /{} answered with status {}", endpoint, status);
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| WeatherError::unavailable(e.without_url().to_string()))
    }
}

// ============================================================================
// Provider payload mapping
// ============================================================================

// Subset of the OpenWeather response bodies consumed by the formatter;
// everything else in the payload is ignored.

#[derive(Debug, Deserialize)]
struct ReadingBody {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionBody {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBody {
    speed: f64,
    #[serde(default)]
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RegionBody {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentBody {
    name: String,
    dt: i64,
    main: ReadingBody,
    weather: Vec<ConditionBody>,
    wind: WindBody,
    #[serde(default)]
    sys: Option<RegionBody>,
}

#[derive(Debug, Deserialize)]
struct CityBody {
    name: String,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastSlotBody {
    dt: i64,
    main: ReadingBody,
    weather: Vec<ConditionBody>,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    city: CityBody,
    list: Vec<ForecastSlotBody>,
}

fn map_current(body: &str, units: Units) -> Result<CurrentConditions, WeatherError> {
    let parsed: CurrentBody =
        serde_json::from_str(body).map_err(|e| WeatherError::malformed(e.to_string()))?;

    Ok(CurrentConditions {
        place: parsed.name,
        country: parsed.sys.and_then(|sys| sys.country),
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        condition: first_condition(&parsed.weather),
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        wind_direction_deg: parsed.wind.deg,
        observed_at: unix_to_utc(parsed.dt),
        units,
    })
}

fn map_forecast(body: &str, units: Units) -> Result<Forecast, WeatherError> {
    let parsed: ForecastBody =
        serde_json::from_str(body).map_err(|e| WeatherError::malformed(e.to_string()))?;

    if parsed.list.is_empty() {
        return Err(WeatherError::malformed("forecast contained no entries"));
    }

    // Entries keep the provider's (chronological) order.
    let entries = parsed
        .list
        .iter()
        .map(|slot| ForecastEntry {
            at: unix_to_utc(slot.dt),
            temperature: slot.main.temp,
            condition: first_condition(&slot.weather),
        })
        .collect();

    Ok(Forecast {
        place: parsed.city.name,
        country: parsed.city.country,
        entries,
        units,
    })
}

fn first_condition(conditions: &[ConditionBody]) -> String {
    conditions
        .first()
        .map(|condition| condition.description.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
}
