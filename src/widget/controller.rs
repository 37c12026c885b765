//! The menu widget controller.
//!
//! [`MenuWidget`] owns the widget state and is the only thing that mutates
//! it. Each handler runs to completion: it applies one named state update,
//! re-renders, shows feedback and queues a model-context digest.

use super::appearance::{Appearance, HostContext};
use super::host::{AppInfo, ContextPublisher, HostBridge};
use super::render::{Action, AssetMap, CardRenderer, Node, Renderer};
use super::state::{AssetReattach, MenuUpdate, Reaction, WidgetState};
use super::summary::context_digest;
use super::toast::{Toast, ToastPhase, Toaster};
use crate::mcp::helpers::{rpc_error, rpc_success};
use crate::mcp::models::METHOD_NOT_FOUND;
use crate::menu::{models::MenuSnapshot, todays_menu};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

/// Construction options for [`MenuWidget`].
pub struct WidgetOptions {
    /// Menu shown before the first tool result arrives.
    pub snapshot: MenuSnapshot,
    pub assets: AssetMap,
    pub reattach: AssetReattach,
    pub renderer: Box<dyn Renderer>,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            snapshot: todays_menu(),
            assets: AssetMap::bundled(),
            reattach: AssetReattach::default(),
            renderer: Box::new(CardRenderer),
        }
    }
}

pub struct MenuWidget {
    state: WidgetState,
    assets: AssetMap,
    reattach: AssetReattach,
    renderer: Box<dyn Renderer>,
    appearance: Appearance,
    toaster: Toaster,
    view: Node,
    renders: u64,
    publisher: Option<ContextPublisher>,
}

impl Default for MenuWidget {
    fn default() -> Self {
        Self::new(WidgetOptions::default())
    }
}

impl MenuWidget {
    /// Creates a widget with no host connection and renders it once.
    pub fn new(options: WidgetOptions) -> Self {
        let mut widget = Self {
            state: WidgetState::new(options.snapshot),
            assets: options.assets,
            reattach: options.reattach,
            renderer: options.renderer,
            appearance: Appearance::default(),
            toaster: Toaster::default(),
            view: Node::new("main"),
            renders: 0,
            publisher: None,
        };
        widget.render();
        widget
    }

    /// Creates and renders a widget, then connects it to `host`.
    ///
    /// A failed connection is logged; the widget keeps working locally.
    pub async fn start(host: Arc<dyn HostBridge>, options: WidgetOptions) -> Self {
        let mut widget = Self::new(options);
        widget.publisher = Some(ContextPublisher::spawn(host.clone()));

        if let Err(e) = host.connect(&AppInfo::default()).await {
            tracing::error!("failed to connect to host: {}", e);
        }

        widget
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The most recent render.
    pub fn view(&self) -> &Node {
        &self.view
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// The most recently shown notification, expired or not.
    pub fn last_notification(&self) -> Option<&Toast> {
        self.toaster.last()
    }

    /// The notification element visible at `now`, if any.
    pub fn notification_view(&mut self, now: Instant) -> Option<Node> {
        self.toaster.visible(now).map(|(toast, phase)| {
            Node::new("div")
                .class("toast")
                .class_if("show", phase == ToastPhase::Showing)
                .text(&toast.message)
        })
    }

    pub fn digest(&self) -> String {
        context_digest(&self.state)
    }

    /// Rebuilds the whole view from state.
    fn render(&mut self) {
        let menu = self
            .renderer
            .render(&self.state.snapshot, &self.state.interactions, &self.assets);

        let mut root = Node::new("main").class("main");
        if let Some(theme) = self.appearance.theme {
            root = root.attr("data-theme", theme.as_str());
        }
        let style = self.appearance.root_style();
        if !style.is_empty() {
            root = root.attr("style", style);
        }
        if let Some(fonts) = &self.appearance.fonts {
            root = root.child(Node::new("style").text(fonts));
        }

        self.view = root.child(menu);
        self.renders += 1;
    }

    fn notify(&mut self, message: String) {
        self.toaster.show(message, Instant::now());
    }

    /// Queues a digest of the current state for the host.
    fn push_context(&self) {
        let digest = self.digest();
        match &self.publisher {
            Some(publisher) => publisher.publish(digest),
            None => tracing::debug!("not connected, model context not sent"),
        }
    }

    /// Dispatches a click on a rendered control.
    pub fn click(&mut self, action: &Action) {
        match action {
            Action::ToggleOrder { dish_id } => self.toggle_order(dish_id),
            Action::React { dish_id, reaction } => self.toggle_reaction(dish_id, *reaction),
        }
    }

    pub fn toggle_order(&mut self, dish_id: &str) {
        let Some(change) = self.state.toggle_order(dish_id) else {
            tracing::debug!("order click for unknown dish {}", dish_id);
            return;
        };

        self.render();
        self.notify(if change.ordered {
            format!("Ordered {} for takeaway! 🎉", change.dish_name)
        } else {
            format!("Cancelled order for {}", change.dish_name)
        });
        self.push_context();
    }

    pub fn toggle_reaction(&mut self, dish_id: &str, reaction: Reaction) {
        let Some(change) = self.state.toggle_reaction(dish_id, reaction) else {
            tracing::debug!("reaction click for unknown dish {}", dish_id);
            return;
        };

        self.render();
        match change.reaction {
            Some(Reaction::Liked) => self.notify(format!("You liked {}! 👍", change.dish_name)),
            Some(Reaction::Disliked) => {
                self.notify(format!("Thanks for the feedback on {}", change.dish_name))
            }
            None => {}
        }
        self.push_context();
    }

    pub fn on_tool_input(&mut self, params: &Value) {
        tracing::info!("Received tool call input: {}", params);
    }

    /// Merges a completed menu tool result and re-renders.
    pub fn on_tool_result(&mut self, result: &Value) {
        tracing::info!("Received tool call result");
        let update = result
            .get("structuredContent")
            .map(MenuUpdate::from_structured)
            .unwrap_or_default();
        if update.is_empty() {
            tracing::debug!("tool result carried no menu data");
        }

        self.state.replace_snapshot(update, self.reattach);
        self.render();
    }

    pub fn on_tool_cancelled(&mut self, reason: Option<&str>) {
        tracing::info!("Tool call cancelled: {}", reason.unwrap_or("no reason given"));
    }

    pub fn on_error(&self, error: &Value) {
        tracing::error!("host reported error: {}", error);
    }

    pub fn on_host_context_changed(&mut self, ctx: HostContext) {
        self.appearance.apply(ctx);
        self.render();
    }

    pub fn on_teardown(&mut self) -> Value {
        tracing::info!("Canteen Menu App is being torn down");
        json!({})
    }

    /// Handles one JSON-RPC message from the host.
    ///
    /// Returns the response to send back for requests; notifications yield
    /// `None`.
    pub fn handle_host_message(&mut self, message: &Value) -> Option<Value> {
        let method = message.get("method").and_then(|m| m.as_str()).unwrap_or("");
        let params = message.get("params").cloned().unwrap_or(Value::Null);
        let id = message.get("id").cloned();

        match method {
            "ui/notifications/tool-input" => self.on_tool_input(&params),
            "ui/notifications/tool-result" => self.on_tool_result(&params),
            "ui/notifications/tool-cancelled" => {
                self.on_tool_cancelled(params.get("reason").and_then(|r| r.as_str()))
            }
            "ui/notifications/host-context-changed" => {
                match serde_json::from_value::<HostContext>(params) {
                    Ok(ctx) => self.on_host_context_changed(ctx),
                    Err(e) => tracing::warn!("ignoring malformed host context: {}", e),
                }
            }
            "ui/resource-teardown" => {
                let result = self.on_teardown();
                return id.map(|id| rpc_success(id, result));
            }
            // Responses to the widget's own requests need no reply.
            _ if message.get("method").is_none() && message.get("result").is_some() => {
                tracing::debug!("host answered request {}", id.unwrap_or(serde_json::Value::Null));
            }
            _ if message.get("error").is_some() => self.on_error(&message["error"]),
            _ => {
                tracing::debug!("unhandled host message: {}", method);
                return id.map(|id| rpc_error(id, METHOD_NOT_FOUND, "Method not found"));
            }
        }

        None
    }

    /// Stops the background sender after flushing any pending digest.
    pub async fn shutdown(self) {
        if let Some(publisher) = self.publisher {
            publisher.shutdown().await;
        }
    }
}
