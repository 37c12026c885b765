//! Error types shared across the canteen menu crate.

use crate::mcp::models::{INTERNAL_ERROR, INVALID_PARAMS};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading server configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Errors raised while serving the UI document resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The bundled document is missing or unreadable.
    #[error("failed to read UI document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown resource: {0}")]
    UnknownUri(String),
}

impl ResourceError {
    /// JSON-RPC error code reported to the host for this failure.
    pub fn rpc_code(&self) -> i32 {
        match self {
            ResourceError::Read { .. } => INTERNAL_ERROR,
            ResourceError::UnknownUri(_) => INVALID_PARAMS,
        }
    }
}

/// Errors raised by the widget's connection to its host runtime.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host channel closed")]
    ChannelClosed,

    #[error("host rejected request: {0}")]
    Rejected(String),
}

/// Errors raised while bundling the UI document.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("INPUT environment variable is not set")]
    MissingInput,

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
