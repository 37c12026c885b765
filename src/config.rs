//! Server configuration, read from the environment.

use crate::error::ConfigError;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub const HOST_VAR: &str = "CANTEEN_MENU_HOST";
pub const PORT_VAR: &str = "CANTEEN_MENU_PORT";
pub const DIST_DIR_VAR: &str = "CANTEEN_MENU_DIST_DIR";

const DEFAULT_PORT: u16 = 8000;

/// Listener and asset settings for the menu server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Explicit location of the UI build output; located heuristically when `None`.
    pub dist_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            dist_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: HOST_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: PORT_VAR,
                value,
            })?;
        }

        config.dist_dir = lookup(DIST_DIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
