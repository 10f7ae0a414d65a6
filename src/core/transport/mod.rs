//! Transport layer for the MCP server.
//!
//! This module provides the transport implementations:
//! - **SSE**: MCP over Server-Sent Events - the default run mode
//! - **STDIO**: Standard input/output - the conventional MCP mode
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler; protocol framing and session
//! management come from the rmcp SDK.

mod config;
mod error;
mod service;

pub mod sse;
pub mod stdio;

pub use config::{SseConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
