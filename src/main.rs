use anyhow::Result;
use tracing_subscriber::EnvFilter;

use skycast::config::AppConfig;
use skycast::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        static_dir = %config.static_dir,
        "Starting Skycast"
    );

    web::run(config).await
}
