//! UI Document Bundler
//!
//! Produces the single, self-contained HTML document served as the widget
//! resource: stylesheets, scripts and binary assets referenced by the input
//! document are inlined so the host can load it without further requests.
//! - `config` – build settings read from the environment
//! - `inline` – the inlining and minification passes

pub mod config;
pub mod inline;

pub use config::BundleConfig;
pub use inline::bundle_document;

use crate::error::BundleError;
use std::path::{Path, PathBuf};

pub(crate) fn read(path: &Path) -> Result<Vec<u8>, BundleError> {
    std::fs::read(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Bundles `config.input` and writes the result into the output directory.
///
/// Existing files in the output directory are left in place. Returns the
/// path of the written document.
pub fn run(config: &BundleConfig) -> Result<PathBuf, BundleError> {
    let html = bundle_document(&config.input, config.development)?;
    let output = config.output_path();

    std::fs::create_dir_all(&config.out_dir).map_err(|source| BundleError::Io {
        path: config.out_dir.clone(),
        source,
    })?;
    std::fs::write(&output, html).map_err(|source| BundleError::Io {
        path: output.clone(),
        source,
    })?;

    tracing::info!(
        "bundled {:?} into {:?} ({} mode)",
        config.input,
        output,
        if config.development { "development" } else { "production" }
    );
    Ok(output)
}
