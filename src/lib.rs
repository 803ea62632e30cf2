pub mod api;
pub mod config;
pub mod downloader;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use api::AppState;
use config::ServerConfig;
use downloader::extractors::{select_engine, ExtractionEngine};
use downloader::Downloader;

/// Build the router around an already chosen engine
pub fn app(engine: Arc<dyn ExtractionEngine>, config: &ServerConfig) -> axum::Router {
    let downloader = Downloader::new(engine, config.storage.clone());
    api::router(AppState::new(Arc::new(downloader)))
}

/// Serve on an already bound listener until Ctrl+C
pub async fn serve(listener: TcpListener, app: axum::Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Pick the engine, bind the configured address and serve
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let engine = select_engine(&config.engine);
    let app = app(engine, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        downloads = %config.storage.downloads_root.display(),
        "Starting YouTube Downloader API"
    );

    serve(listener, app).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", err);
        // Without the handler, keep serving rather than shutting down at once.
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
