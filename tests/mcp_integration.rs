//! Integration tests for the MCP (Model Context Protocol) server
//!
//! These tests verify the complete MCP protocol surface including:
//! - Server initialization and handshake
//! - Tool discovery and the canteen-menu tool
//! - Resource discovery and reading of the widget document
//! - Error handling

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

use canteen_menu::menu::state::UI_DOCUMENT_FILE;
use canteen_menu::menu::AppState;
use canteen_menu::router::create_app_router;

const DOCUMENT: &str = "<!DOCTYPE html><html><body><main class=\"main\">menu</main></body></html>\n";

/// Creates a test app serving `DOCUMENT`. The returned directory must be
/// kept alive for the duration of the test.
fn create_test_app() -> (axum::Router, TempDir) {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join(UI_DOCUMENT_FILE), DOCUMENT).unwrap();
    let state = Arc::new(AppState::with_dist_dir(dist.path()));
    (create_app_router(state), dist)
}

/// Creates a test app whose build output directory is empty.
fn create_app_without_document() -> (axum::Router, TempDir) {
    let dist = tempfile::tempdir().unwrap();
    let state = Arc::new(AppState::with_dist_dir(dist.path()));
    (create_app_router(state), dist)
}

/// Sends a raw JSON-RPC body and returns the status and parsed response
async fn send_json(app: &axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    send_json(
        app,
        json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id
        }),
    )
    .await
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let (app, _dist) = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/event-stream"
    );

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();
    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "canteen-menu-rust");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;
    assert_eq!(status, StatusCode::OK);

    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);

    let tool = &tools[0];
    assert_eq!(tool["name"], "canteen-menu");
    assert_eq!(tool["title"], "Today's Canteen Menu");
    assert_eq!(tool["inputSchema"]["properties"], json!({}));
    assert_eq!(
        tool["outputSchema"]["required"],
        json!(["date", "dishes"])
    );
    assert_eq!(
        tool["_meta"]["ui"]["resourceUri"],
        "ui://canteen-menu/mcp-app.html"
    );
}

#[tokio::test]
async fn test_mcp_tool_call_canteen_menu() {
    let (app, _dist) = create_test_app();

    let params = json!({ "name": "canteen-menu", "arguments": {} });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 3).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);

    let result = &body["result"];
    let structured = &result["structuredContent"];
    assert!(structured["date"].is_string());

    let dishes = structured["dishes"].as_array().unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0]["id"], "dish-of-the-day");
    assert_eq!(dishes[1]["id"], "green-dish");
    assert_eq!(dishes[1]["tags"], json!(["vegetarian", "vegan", "healthy"]));
    assert!(dishes.iter().all(|d| d.get("image").is_none()));

    let content = &result["content"][0];
    assert_eq!(content["type"], "text");
    let text = content["text"].as_str().unwrap();
    for dish in dishes {
        assert!(text.contains(dish["name"].as_str().unwrap()));
        assert!(text.contains(dish["title"].as_str().unwrap()));
    }
    assert!(text.contains(structured["date"].as_str().unwrap()));
}

#[tokio::test]
async fn test_mcp_tool_call_ignores_arguments() {
    let (app, _dist) = create_test_app();

    let params = json!({ "name": "canteen-menu", "arguments": { "day": "tomorrow" } });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 4).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].is_null());
    assert_eq!(
        body["result"]["structuredContent"]["dishes"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_mcp_resources_list() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 5).await;
    assert_eq!(status, StatusCode::OK);

    let resources = body["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["uri"], "ui://canteen-menu/mcp-app.html");
    assert_eq!(resources[0]["mimeType"], "text/html;profile=mcp-app");
}

#[tokio::test]
async fn test_mcp_resources_read() {
    let (app, _dist) = create_test_app();

    let params = json!({ "uri": "ui://canteen-menu/mcp-app.html" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 6).await;
    assert_eq!(status, StatusCode::OK);

    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);

    let content = &contents[0];
    assert_eq!(content["uri"], "ui://canteen-menu/mcp-app.html");
    assert_eq!(content["mimeType"], "text/html;profile=mcp-app");
    assert_eq!(content["text"], DOCUMENT);
}

#[tokio::test]
async fn test_mcp_resources_read_missing_document() {
    let (app, _dist) = create_app_without_document();

    let (status, body) = send_jsonrpc_request(&app, "resources/read", None, 7).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("mcp-app.html"));
}

#[tokio::test]
async fn test_mcp_resources_read_unknown_uri() {
    let (app, _dist) = create_test_app();

    let params = json!({ "uri": "ui://canteen-menu/other.html" });
    let (_, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 8).await;

    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let (app, _dist) = create_test_app();

    let params = json!({ "name": "unknown_tool", "arguments": {} });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 9).await;

    assert_eq!(status, StatusCode::OK);
    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 10);
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_ping() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 11).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 11);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let (app, _dist) = create_test_app();

    let (status, body) = send_json(
        &app,
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let (app, _dist) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let (app, _dist) = create_test_app();

    let (status, _) = send_json(&app, json!({ "jsonrpc": "2.0", "method": 123, "id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_root_endpoint_serves_mcp() {
    let (app, _dist) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"jsonrpc":"2.0","method":"ping","id":12}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
