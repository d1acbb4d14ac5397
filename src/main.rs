use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use airchat::airports::AirportIndex;
use airchat::assistant::Assistant;
use airchat::config::AirChatConfig;
use airchat::flights::AviationStackClient;
use airchat::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AirChatConfig::load().with_context(|| "Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting AirChat v{}", airchat::VERSION);

    // The reference table is built once here; a failure at this point is
    // fatal, the router never runs without it.
    let airports = Arc::new(
        AirportIndex::load_remote(&config.airports.dataset_url)
            .await
            .with_context(|| "Failed to load the airport reference dataset")?,
    );

    let flights = Arc::new(AviationStackClient::new(&config)?);
    let assistant = Arc::new(Assistant::new(airports, flights));

    web::run(assistant, config.server.port).await
}
