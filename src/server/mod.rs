// src/server/mod.rs

use crate::config::ServiceConfig;
use crate::core::host::StandaloneHost;
use crate::core::properties::ServerProperties;
use crate::core::providers::HostProvider;
use crate::core::ticks::TickBus;
use crate::core::{RateSampler, StatusAggregator};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

mod shutdown;
mod status_server;

pub use shutdown::wait_for_signal;
pub use status_server::{StatusServer, router};

/// Creates a rate sampler, subscribes it to `bus`, and wires it to `host` and the
/// configured `server.properties` file.
pub fn build_aggregator(
    config: &ServiceConfig,
    bus: &TickBus,
    host: Arc<dyn HostProvider>,
) -> StatusAggregator {
    let sampler = Arc::new(RateSampler::new());
    bus.subscribe(sampler.clone());
    let properties = Arc::new(ServerProperties::new(&config.server_properties));
    StatusAggregator::new(sampler, host, properties, config.max_players_fallback)
}

/// Runs the service with the built-in standalone host until a shutdown signal.
pub async fn run(config: ServiceConfig) -> Result<()> {
    log_startup_info(&config);

    let bus = Arc::new(TickBus::new());
    let host = Arc::new(StandaloneHost::new(bus.clone(), &config.standalone));
    let aggregator = build_aggregator(&config, &bus, host.clone());

    // Bind before spawning anything: without the endpoint there is nothing to run.
    let server = StatusServer::bind(&config.host, config.port, aggregator).await?;

    let (shutdown_tx, _) = broadcast::channel(1);
    let host_task = tokio::spawn(host.run(shutdown_tx.subscribe()));

    let result = server.serve(wait_for_signal()).await;

    let _ = shutdown_tx.send(());
    if let Err(e) = host_task.await {
        error!("Standalone host task panicked: {e:?}");
    }

    result.map_err(Into::into)
}

fn log_startup_info(config: &ServiceConfig) {
    info!("Starting tickstat v{}", env!("CARGO_PKG_VERSION"));
    info!("Status endpoint: {}", config.bind_addr());
    info!("Max players fallback: {}", config.max_players_fallback);
    info!("Server properties: {}", config.server_properties);
}
