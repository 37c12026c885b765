use canteen_menu::config::ServerConfig;
use canteen_menu::menu::AppState;
use canteen_menu::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canteen_menu=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let state = match &config.dist_dir {
        Some(dir) => AppState::with_dist_dir(dir),
        None => AppState::new(),
    };

    // The document is read per request; warn early so a missing build is obvious.
    if !state.document_path().exists() {
        tracing::warn!(
            "UI document {:?} not found; resources/read will fail until it is bundled",
            state.document_path()
        );
    }

    let app = create_app_router(Arc::new(state));

    let addr = config.socket_addr();
    tracing::info!("Canteen menu server v{} running on http://{}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
