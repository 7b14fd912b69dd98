use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog REST entry point
///
/// Wires the in-memory item and cart stores into the use cases and serves
/// them over HTTP:
/// - config/: listener address and CORS
/// - setup/: dependency wiring and the poem server
/// - api/: routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();
    let container = DependencyContainer::new();

    Server::run(config, container).await?;

    Ok(())
}
