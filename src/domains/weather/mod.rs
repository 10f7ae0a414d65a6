//! Weather domain module.
//!
//! This module holds the lookup pipeline behind the MCP tools:
//!
//! - `model.rs` - validated queries and the payloads mapped from provider JSON
//! - `client.rs` - the OpenWeather HTTP client
//! - `format.rs` - rendering of payloads into display strings
//! - `error.rs` - the weather failure taxonomy
//!
//! Nothing in this module holds state across calls; a query is constructed
//! per invocation, sent once, rendered and discarded.

pub mod client;
pub mod error;
pub mod format;
pub mod model;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use model::{CurrentConditions, Forecast, ForecastEntry, Place, Units, WeatherQuery};
