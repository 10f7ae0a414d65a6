//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp transports
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define the params struct and `execute()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add a route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
