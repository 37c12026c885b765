//! The widget's connection to its host runtime.
//!
//! [`HostBridge`] is the seam to the host: connecting and pushing model
//! context. [`MessageChannelHost`] implements it as JSON-RPC messages on an
//! outbound channel, the way an embedded app posts messages to its host
//! frame. [`ContextPublisher`] sends digests through a bridge from a
//! background task, collapsing bursts into the most recent digest.

use crate::error::HostError;
use crate::mcp::helpers::rpc_request;
use crate::mcp::models::PROTOCOL_VERSION;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

pub const APP_NAME: &str = "Canteen Menu App";

/// Identity the widget announces to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Performs the initial handshake with the host.
    async fn connect(&self, app: &AppInfo) -> Result<(), HostError>;

    /// Replaces the text the host shows the model about the widget's state.
    async fn update_model_context(&self, text: &str) -> Result<(), HostError>;
}

/// A [`HostBridge`] that writes JSON-RPC requests to an outbound channel.
///
/// Requests are fire-and-forget: responses from the host are not awaited.
#[derive(Debug)]
pub struct MessageChannelHost {
    outbound: mpsc::UnboundedSender<Value>,
    next_id: AtomicU64,
}

impl MessageChannelHost {
    pub fn new(outbound: mpsc::UnboundedSender<Value>) -> Self {
        Self {
            outbound,
            next_id: AtomicU64::new(1),
        }
    }

    fn send(&self, method: &str, params: Value) -> Result<(), HostError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.outbound
            .send(rpc_request(id, method, params))
            .map_err(|_| HostError::ChannelClosed)
    }
}

#[async_trait]
impl HostBridge for MessageChannelHost {
    async fn connect(&self, app: &AppInfo) -> Result<(), HostError> {
        self.send(
            "ui/initialize",
            json!({
                "appInfo": app,
                "appCapabilities": {},
                "protocolVersion": PROTOCOL_VERSION
            }),
        )
    }

    async fn update_model_context(&self, text: &str) -> Result<(), HostError> {
        self.send(
            "ui/update-model-context",
            json!({ "content": [{ "type": "text", "text": text }] }),
        )
    }
}

/// Sends model-context digests to the host from a single background task.
///
/// Only the latest unsent digest is kept: publishing while a send is in
/// flight replaces any digest still waiting, so the host always ends up with
/// the most recent state and never sees an older digest after a newer one.
/// Send failures are logged and not retried.
pub struct ContextPublisher {
    latest: watch::Sender<Option<String>>,
    task: JoinHandle<()>,
}

impl ContextPublisher {
    /// Spawns the sender task. Must be called within a Tokio runtime.
    pub fn spawn(host: Arc<dyn HostBridge>) -> Self {
        let (latest, mut pending) = watch::channel::<Option<String>>(None);

        let task = tokio::spawn(async move {
            while pending.changed().await.is_ok() {
                let digest = pending.borrow_and_update().clone();
                let Some(digest) = digest else { continue };

                if let Err(e) = host.update_model_context(&digest).await {
                    tracing::error!("failed to update model context: {}", e);
                }
            }
        });

        Self { latest, task }
    }

    /// Queues `digest`, replacing any digest not yet sent.
    pub fn publish(&self, digest: String) {
        self.latest.send_replace(Some(digest));
    }

    /// Sends whatever is still pending, then stops the task.
    pub async fn shutdown(self) {
        drop(self.latest);
        if let Err(e) = self.task.await {
            tracing::error!("context publisher task failed: {}", e);
        }
    }
}
