//! Canteen Menu Domain Module
//!
//! This module contains the server-side menu provider, including:
//! - Domain models (Dish, MenuSnapshot)
//! - The fixed dish catalog and date labelling
//! - Text rendering helpers for tool output
//! - Application state (UI document location and loading)

pub mod catalog;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use catalog::{menu_for, todays_menu};
pub use models::{Dish, MenuSnapshot};
pub use state::{AppState, SharedState};
