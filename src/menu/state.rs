//! Canteen Menu Application State
//!
//! The provider itself is stateless; the only thing the server holds on to is
//! the location of the bundled UI document served as the widget resource.

use crate::error::ResourceError;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// File name of the bundled widget document inside the build output directory
pub const UI_DOCUMENT_FILE: &str = "mcp-app.html";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: where the UI build output lives.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory containing the bundled UI document.
    pub dist_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an AppState by locating the build output directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_dist_dir(Self::locate_dist_directory(&current_dir))
    }

    /// Creates an AppState serving documents from an explicit directory
    pub fn with_dist_dir(dist_dir: impl Into<PathBuf>) -> Self {
        let dist_dir = dist_dir.into();
        tracing::info!("Using UI build output directory: {:?}", dist_dir);
        Self { dist_dir }
    }

    /// Attempts to locate the build output directory
    fn locate_dist_directory(current_dir: &Path) -> PathBuf {
        // 1. ./dist
        // 2. ../dist (if running from a subdir)
        // 3. Fallback to "dist" relative path

        if current_dir.join("dist").exists() {
            return current_dir.join("dist");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("dist").exists() {
                return parent.join("dist");
            }
        }

        PathBuf::from("dist")
    }

    pub fn document_path(&self) -> PathBuf {
        self.dist_dir.join(UI_DOCUMENT_FILE)
    }

    /// Reads the bundled widget document verbatim.
    pub async fn load_widget_html(&self) -> Result<String, ResourceError> {
        let path = self.document_path();
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ResourceError::Read { path, source })
    }
}
