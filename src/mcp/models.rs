//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the menu tool
pub const TOOL_NAME: &str = "canteen-menu";
/// Human readable title of the menu tool
pub const TOOL_TITLE: &str = "Today's Canteen Menu";
/// URI of the widget document resource
pub const WIDGET_RESOURCE_URI: &str = "ui://canteen-menu/mcp-app.html";
/// MIME type marking a document as an embeddable MCP app UI
pub const WIDGET_MIME_TYPE: &str = "text/html;profile=mcp-app";
/// Server identifier
pub const SERVER_NAME: &str = "canteen-menu-rust";
/// Protocol version for MCP (first revision with structured tool output)
pub const PROTOCOL_VERSION: &str = "2025-06-18";

// =============================================================================
// JSON-RPC Error Codes
// =============================================================================

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier; absent for notifications
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with("notifications/")
    }
}
