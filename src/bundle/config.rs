//! Bundler settings, read from the environment.

use crate::error::BundleError;
use std::path::PathBuf;

pub const INPUT_VAR: &str = "INPUT";
pub const MODE_VAR: &str = "NODE_ENV";
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Document to bundle.
    pub input: PathBuf,
    /// Development builds are not minified and keep script source names.
    pub development: bool,
    pub out_dir: PathBuf,
}

impl BundleConfig {
    pub fn from_env() -> Result<Self, BundleError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from a variable lookup. `INPUT` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BundleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup(INPUT_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(BundleError::MissingInput)?;

        Ok(Self {
            input: PathBuf::from(input),
            development: lookup(MODE_VAR).as_deref() == Some("development"),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        })
    }

    /// Output keeps the input's file name.
    pub fn output_path(&self) -> PathBuf {
        match self.input.file_name() {
            Some(name) => self.out_dir.join(name),
            None => self.out_dir.join("index.html"),
        }
    }
}
