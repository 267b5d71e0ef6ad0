// src/core/snapshot.rs

use crate::core::weather::Weather;
use serde::Serialize;

/// A point-in-time view of the host, built fresh for every status request.
///
/// Field names on the wire are stable; dashboards parse them directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    #[serde(rename = "maxPlayers")]
    max_players: u32,
    #[serde(rename = "onlinePlayers")]
    online_players: Vec<String>,
    #[serde(rename = "playerCount")]
    player_count: usize,
    #[serde(rename = "protocol")]
    protocol_version: i64,
    #[serde(rename = "time")]
    world_time: i64,
    tps: u32,
    #[serde(rename = "version")]
    server_version: String,
    weather: Weather,
}

impl StatusSnapshot {
    /// Assembles a snapshot. `player_count` is derived from `online_players`.
    pub fn new(
        max_players: u32,
        online_players: Vec<String>,
        protocol_version: i64,
        world_time: i64,
        tps: u32,
        server_version: String,
        weather: Weather,
    ) -> Self {
        Self {
            max_players,
            player_count: online_players.len(),
            online_players,
            protocol_version,
            world_time,
            tps,
            server_version,
            weather,
        }
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    pub fn online_players(&self) -> &[String] {
        &self.online_players
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn protocol_version(&self) -> i64 {
        self.protocol_version
    }

    pub fn world_time(&self) -> i64 {
        self.world_time
    }

    pub fn tps(&self) -> u32 {
        self.tps
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// Serializes the snapshot as indented JSON for the status endpoint.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
