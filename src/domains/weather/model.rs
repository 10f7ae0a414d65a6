//! Weather domain data model.
//!
//! `WeatherQuery` is the validated form of a tool's raw argument mapping;
//! its constructors are the single place where caller input is checked.
//! `CurrentConditions` and `Forecast` are the payloads mapped from provider
//! JSON, immutable once built.

use chrono::{DateTime, Utc};

use super::error::WeatherError;

/// Measurement system for temperature and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Kelvin,
}

impl Units {
    /// Parse a caller-supplied units string (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "kelvin" => Ok(Self::Kelvin),
            other => Err(WeatherError::invalid_argument(format!(
                "unsupported units '{other}' (expected metric, imperial or kelvin)"
            ))),
        }
    }

    /// Value of the `units` query parameter understood by OpenWeather.
    /// Kelvin is the provider's "standard" mode.
    pub fn api_value(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Kelvin => "standard",
        }
    }

    /// Temperature symbol for display.
    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Wind speed unit for display. OpenWeather reports m/s except in
    /// imperial mode.
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            _ => "m/s",
        }
    }
}

/// The place a query targets: a free-form name or a coordinate pair.
/// Exactly one of the two forms is set per query.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    /// "City" or "City,CountryCode"; geocoding is left to the provider.
    Named(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Coordinates {
                latitude,
                longitude,
            } => write!(f, "({latitude}, {longitude})"),
        }
    }
}

/// A validated weather lookup, constructed per request and discarded after
/// use.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub place: Place,
    pub units: Units,
}

impl WeatherQuery {
    /// Validate a name-based lookup.
    pub fn by_name(location: &str, units: Option<&str>) -> Result<Self, WeatherError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(WeatherError::invalid_argument(
                "location must be a non-empty string",
            ));
        }

        Ok(Self {
            place: Place::Named(location.to_string()),
            units: resolve_units(units)?,
        })
    }

    /// Validate a coordinate lookup.
    pub fn by_coordinates(
        latitude: f64,
        longitude: f64,
        units: Option<&str>,
    ) -> Result<Self, WeatherError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::invalid_argument(format!(
                "latitude must be a finite number in [-90, 90], got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::invalid_argument(format!(
                "longitude must be a finite number in [-180, 180], got {longitude}"
            )));
        }

        Ok(Self {
            place: Place::Coordinates {
                latitude,
                longitude,
            },
            units: resolve_units(units)?,
        })
    }
}

/// Absent units default to metric.
fn resolve_units(raw: Option<&str>) -> Result<Units, WeatherError> {
    match raw {
        Some(raw) => Units::parse(raw),
        None => Ok(Units::default()),
    }
}

/// A single observation mapped from the provider payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub place: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: f64,
    /// Meteorological degrees; the provider omits this in calm conditions.
    pub wind_direction_deg: Option<f64>,
    pub observed_at: DateTime<Utc>,
    pub units: Units,
}

/// One forecast interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub at: DateTime<Utc>,
    pub temperature: f64,
    pub condition: String,
}

/// Chronological forecast entries for a place, built eagerly from a single
/// provider response. Entries keep the provider's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub place: String,
    pub country: Option<String>,
    pub entries: Vec<ForecastEntry>,
    pub units: Units,
}
