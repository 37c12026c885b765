//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the canteen
//! menu provider. It exports `handle_tool_call` publicly to make it
//! accessible for tests.

use super::{helpers::*, models::*};
use crate::error::ResourceError;
use crate::menu::{helpers::menu_text, models::MenuSnapshot, state::*, todays_menu};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    if req.is_notification() {
        tracing::debug!("MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!("MCP call: {} (id: {})", method_name, id);

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => match handle_resources_read(&state, &params).await {
            Ok(result) => rpc_success(id, result),
            Err(e) => {
                tracing::error!("resources/read failed: {}", e);
                rpc_error(id, e.rpc_code(), e.to_string())
            }
        },
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        _ => {
            tracing::warn!("Unknown method: {}", method_name);
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [{
            "name": TOOL_NAME,
            "title": TOOL_TITLE,
            "description": "Shows today's canteen menu with dish of the day and green dish options.",
            "inputSchema": input_schema(),
            "outputSchema": output_schema(),
            "_meta": widget_meta()
        }]
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "name": WIDGET_RESOURCE_URI,
            "uri": WIDGET_RESOURCE_URI,
            "mimeType": WIDGET_MIME_TYPE
        }]
    })
}

/// Handles `resources/read` request.
///
/// A missing `uri` parameter is read as the widget document, the only
/// resource this server has.
async fn handle_resources_read(state: &AppState, params: &Value) -> Result<Value, ResourceError> {
    if let Some(uri) = params.get("uri").and_then(|u| u.as_str()) {
        if uri != WIDGET_RESOURCE_URI {
            return Err(ResourceError::UnknownUri(uri.to_string()));
        }
    }

    let html = state.load_widget_html().await?;
    Ok(json!({
        "contents": [{
            "uri": WIDGET_RESOURCE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html
        }]
    }))
}

/// Handles `tools/call` request. The menu tool takes no arguments; any that
/// are sent are ignored.
pub fn handle_tool_call(name: &str, _args: Value) -> Result<Value, String> {
    match name {
        TOOL_NAME => Ok(menu_tool_result(&todays_menu())),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Builds the `tools/call` result for a menu: text rendering plus structured
/// content without image keys.
pub fn menu_tool_result(menu: &MenuSnapshot) -> Value {
    json!({
        "content": [{ "type": "text", "text": menu_text(menu) }],
        "structuredContent": menu.structured()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{catalog::catalog, menu_for};
    use chrono::NaiveDate;

    #[test]
    fn tool_result_matches_catalog() {
        let result = handle_tool_call(TOOL_NAME, Value::Null).unwrap();
        let dishes = result["structuredContent"]["dishes"].as_array().unwrap();
        let catalog = catalog();

        assert_eq!(dishes.len(), catalog.len());
        for (sent, expected) in dishes.iter().zip(&catalog) {
            assert_eq!(sent["id"], expected.id.as_str());
            assert!(sent.get("image").is_none());
        }
    }

    #[test]
    fn tool_result_text_and_date() {
        let menu = menu_for(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let result = menu_tool_result(&menu);

        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["structuredContent"]["date"], "Sunday, October 18, 2026");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("**Green Dish of the Day**: Tuscan Bean Soup"));
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = handle_tool_call("order_lunch", json!({})).unwrap_err();
        assert_eq!(err, "Unknown tool: order_lunch");
    }

    #[tokio::test]
    async fn read_rejects_foreign_uri() {
        let state = AppState::with_dist_dir("/nonexistent");
        let err = handle_resources_read(&state, &json!({ "uri": "ui://other/app.html" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::UnknownUri(_)));
    }
}
