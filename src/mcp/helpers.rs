//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication and
//! the tool/resource metadata and schemas advertised to the host.

use super::models::WIDGET_RESOURCE_URI;
use serde_json::{json, Value};

/// Constructs the metadata linking the menu tool to its UI resource.
///
/// `ui.resourceUri` is the MCP Apps key; the `openai/*` keys let OpenAI Apps
/// hosts render the same document.
pub fn widget_meta() -> Value {
    json!({
        "ui": { "resourceUri": WIDGET_RESOURCE_URI },
        "openai/outputTemplate": WIDGET_RESOURCE_URI,
        "openai/toolInvocation/invoking": "Fetching today's menu",
        "openai/toolInvocation/invoked": "Menu ready",
        "openai/widgetAccessible": true,
    })
}

/// JSON schema of the menu tool's input: an object with no parameters.
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

/// JSON schema of the menu tool's structured output.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "date": { "type": "string" },
            "dishes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "title": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "tags": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["id", "title", "name", "description", "tags"]
                }
            }
        },
        "required": ["date", "dishes"]
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Builds a JSON-RPC 2.0 request. Also used by the widget when talking to
/// its host.
pub fn rpc_request(id: u64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);

        let request = rpc_request(3, "ping", json!({}));
        assert_eq!(request["method"], "ping");
        assert_eq!(request["id"], 3);
    }

    #[test]
    fn output_schema_omits_image() {
        let schema = output_schema();
        let dish = &schema["properties"]["dishes"]["items"]["properties"];
        assert!(dish.get("image").is_none());
        assert!(dish["tags"].is_object());
    }
}
