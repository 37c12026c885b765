//! Canteen Menu Library
//!
//! This library provides a canteen menu app for MCP hosts: a server-side
//! menu provider exposing a tool and a UI resource, and the client-side
//! widget logic that renders the menu and reports the user's choices back
//! to the model.

// Domain modules
pub mod menu;
pub mod widget;

// Protocol
pub mod mcp;

// Build tooling
pub mod bundle;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
