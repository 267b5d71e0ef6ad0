// src/core/host.rs

//! A built-in host used when the service runs on its own rather than embedded in a
//! game server. It drives a `TickBus` at a fixed cadence and reports static live data.

use crate::config::StandaloneConfig;
use crate::core::StatusError;
use crate::core::providers::{HostProvider, OVERWORLD};
use crate::core::ticks::TickBus;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Length of one in-game day, in ticks. World time wraps at this value.
pub const DAY_LENGTH_TICKS: i64 = 24_000;

#[derive(Debug)]
pub struct StandaloneHost {
    bus: Arc<TickBus>,
    tick_rate: u32,
    server_version: String,
    protocol_version: i64,
    world_time: AtomicI64,
}

impl StandaloneHost {
    pub fn new(bus: Arc<TickBus>, config: &StandaloneConfig) -> Self {
        Self {
            bus,
            tick_rate: config.tick_rate,
            server_version: config.server_version.clone(),
            protocol_version: config.protocol_version,
            world_time: AtomicI64::new(0),
        }
    }

    /// Runs one processing cycle: advances the world clock and fires the tick bus.
    pub fn tick(&self) {
        // Single writer; a load/store pair is enough.
        let next = (self.world_time.load(Ordering::Relaxed) + 1) % DAY_LENGTH_TICKS;
        self.world_time.store(next, Ordering::Relaxed);
        self.bus.fire();
    }

    /// Drives `tick` at the configured rate until shutdown is signalled.
    pub async fn run(self: Arc<Self>, mut shutdown_rx: broadcast::Receiver<()>) {
        let period = Duration::from_secs(1) / self.tick_rate.max(1);
        info!(
            "Standalone host ticking at {} Hz ({:?} per cycle).",
            self.tick_rate, period
        );
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                }
                _ = shutdown_rx.recv() => {
                    info!("Standalone host shutting down.");
                    return;
                }
            }
        }
    }
}

impl HostProvider for StandaloneHost {
    fn online_players(&self) -> Result<Vec<String>, StatusError> {
        Ok(Vec::new())
    }

    fn protocol_version(&self) -> Result<i64, StatusError> {
        Ok(self.protocol_version)
    }

    fn world_time(&self, dimension: i32) -> Result<i64, StatusError> {
        if dimension != OVERWORLD {
            return Err(StatusError::Internal(format!(
                "dimension {dimension} is not simulated"
            )));
        }
        Ok(self.world_time.load(Ordering::Relaxed))
    }

    fn server_version(&self) -> Result<String, StatusError> {
        Ok(self.server_version.clone())
    }

    fn weather_code(&self) -> Result<i64, StatusError> {
        Ok(0)
    }
}
