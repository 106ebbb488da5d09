//! livestatus-api - read-only REST gateway for Livestatus
//!
//! Serves hosts, services, contacts, comments and downtimes of a Naemon or
//! Nagios core as JSON, querying its Livestatus socket on every request.

mod config;
mod livestatus;
mod web;

use config::ServerConfig;
use web::Server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("livestatus_api=info".parse()?))
        .init();

    // Load configuration
    let cfg = ServerConfig::load();
    tracing::info!("Starting livestatus-api on {}...", cfg.listen_address);
    tracing::info!(
        "Using Livestatus socket at {} (timeout {:?})",
        cfg.socket_path.display(),
        cfg.timeout
    );

    // Start web server
    let server = Server::new(cfg);
    server.start().await?;

    Ok(())
}
