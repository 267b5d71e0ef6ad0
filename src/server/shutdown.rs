// src/server/shutdown.rs

use tokio::signal::unix::{SignalKind, signal};
use tracing::{error, info};

/// Resolves when the process receives SIGINT or SIGTERM.
pub async fn wait_for_signal() {
    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to register signal handlers: {}. Falling back to Ctrl-C.", e);
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            return;
        }
    };

    tokio::select! {
        _ = sigint.recv() => info!("SIGINT received, initiating graceful shutdown."),
        _ = sigterm.recv() => info!("SIGTERM received, initiating graceful shutdown."),
    }
}
