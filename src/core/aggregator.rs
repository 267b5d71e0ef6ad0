// src/core/aggregator.rs

//! Composes status snapshots from the rate sampler and the host's live data.

use crate::core::StatusError;
use crate::core::providers::{HostProvider, MaxPlayersProvider, OVERWORLD};
use crate::core::sampler::RateSampler;
use crate::core::snapshot::StatusSnapshot;
use crate::core::weather::Weather;
use std::sync::Arc;
use tracing::debug;

/// Builds a fresh `StatusSnapshot` per call. Nothing is cached.
#[derive(Clone)]
pub struct StatusAggregator {
    sampler: Arc<RateSampler>,
    host: Arc<dyn HostProvider>,
    max_players: Arc<dyn MaxPlayersProvider>,
    max_players_fallback: u32,
}

impl StatusAggregator {
    pub fn new(
        sampler: Arc<RateSampler>,
        host: Arc<dyn HostProvider>,
        max_players: Arc<dyn MaxPlayersProvider>,
        max_players_fallback: u32,
    ) -> Self {
        Self {
            sampler,
            host,
            max_players,
            max_players_fallback,
        }
    }

    pub fn sampler(&self) -> &Arc<RateSampler> {
        &self.sampler
    }

    /// Queries every provider and assembles a snapshot.
    ///
    /// A failing max-players lookup falls back to the configured capacity; any
    /// other provider failure aborts the build with `StatusError::Aggregation`.
    pub fn build(&self) -> Result<StatusSnapshot, StatusError> {
        let max_players = self.resolve_max_players();

        let online_players = self
            .host
            .online_players()
            .map_err(|e| StatusError::aggregation("player list", e))?;
        let protocol_version = self
            .host
            .protocol_version()
            .map_err(|e| StatusError::aggregation("protocol version", e))?;
        let world_time = self
            .host
            .world_time(OVERWORLD)
            .map_err(|e| StatusError::aggregation("world time", e))?;
        let server_version = self
            .host
            .server_version()
            .map_err(|e| StatusError::aggregation("server version", e))?;
        let weather = self
            .host
            .weather_code()
            .map(Weather::from_code)
            .map_err(|e| StatusError::aggregation("weather", e))?;

        Ok(StatusSnapshot::new(
            max_players,
            online_players,
            protocol_version,
            world_time,
            self.sampler.current_rate(),
            server_version,
            weather,
        ))
    }

    fn resolve_max_players(&self) -> u32 {
        match self.max_players.max_players() {
            Ok(max) => max,
            Err(e) => {
                debug!(
                    "Max players lookup failed ({}); using fallback {}",
                    e, self.max_players_fallback
                );
                self.max_players_fallback
            }
        }
    }
}
