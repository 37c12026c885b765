//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP surface of the menu provider, including:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error responses, tool/resource metadata, schemas)
//! - MCP handlers (initialize, tools/list, tools/call, resources/read, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
