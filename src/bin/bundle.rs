//! Bundles the widget UI document into `dist/`.
//!
//! ```bash
//! INPUT=ui/mcp-app.html cargo run --bin bundle
//! INPUT=ui/mcp-app.html NODE_ENV=development cargo run --bin bundle
//! ```

use canteen_menu::bundle::{self, BundleConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canteen_menu=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BundleConfig::from_env()?;
    bundle::run(&config)?;

    Ok(())
}
