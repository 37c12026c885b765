//! Canteen Menu Widget
//!
//! The client side of the menu app: it owns the menu shown to the user and
//! the user's orders and reactions, renders them, and keeps the host's model
//! context informed.
//! - `state` – widget state and its named update operations
//! - `render` – display tree and the `Renderer` capability
//! - `summary` – model-context digest
//! - `toast` – transient notifications
//! - `appearance` – host context directives
//! - `host` – host bridge and the digest publisher
//! - `controller` – `MenuWidget`, which ties the above together

pub mod appearance;
pub mod controller;
pub mod host;
pub mod render;
pub mod state;
pub mod summary;
pub mod toast;

pub use controller::{MenuWidget, WidgetOptions};
pub use host::{HostBridge, MessageChannelHost};
pub use state::{AssetReattach, Reaction};
