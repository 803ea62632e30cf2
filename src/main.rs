use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use youtube_downloader_api::config::ServerConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::default();
    let addr = config.bind_addr;

    youtube_downloader_api::run(config)
        .await
        .wrap_err_with(|| format!("running API server on {}", addr))
}
