//! Weather MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server fronting the
//! OpenWeather API: current weather and 5-day forecast lookups are exposed
//! as tools over the SSE transport, with STDIO available as an alternative
//! run mode.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server handler and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The MCP tool definitions, router and registry
//!   - **weather**: Query validation, the OpenWeather client and rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
